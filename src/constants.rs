/// Constants used by the tokenizer.
pub mod tokenizer {
    /// ASCII punctuation stripped from both ends of each whitespace-split
    /// piece. Interior punctuation is preserved.
    pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
}

/// Constants used by file discovery.
pub mod corpus {
    /// Filename suffix that marks a file as a lyric file.
    pub const LYRICS_SUFFIX: &str = "lyrics.txt";
}

/// Constants used by grouping-key derivation.
pub mod grouping {
    /// Group key used when all files share one vocabulary.
    pub const GLOBAL_KEY: &str = "all";
    /// Number of leading filename characters that identify a decade.
    pub const DECADE_PREFIX_LEN: usize = 3;
    /// Literal suffix appended to the filename prefix to form a decade key.
    pub const DECADE_SUFFIX: &str = "0s";
}

/// Constants used by the output writer.
pub mod writer {
    /// Terminator written after every record in the aggregate file.
    ///
    /// The newline-plus-leading-space sequence is a quirk of the historical
    /// output format; downstream consumers depend on it byte-for-byte.
    pub const RECORD_TERMINATOR: &str = "\n ";
}
