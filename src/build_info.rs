//! Version details baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
