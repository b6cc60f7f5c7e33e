//! TypeScript bindings for the browser shell are generated by `build.rs`
//! into `generated/typescript`.
