pub mod compile_time {
    pub mod syntax {
        /// Maximum expression nesting depth accepted by the parser.
        /// Bounds recursion so pathologically nested input cannot
        /// exhaust the stack.
        pub const MAX_PARSE_DEPTH: usize = 256;
    }
}
