//! Driver tests: multi-file runs, sinks and per-file outcomes.
