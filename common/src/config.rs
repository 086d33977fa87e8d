pub struct Config {
    /// Suppresses the banner, spinner and summary output.
    ///
    /// Warning and error diagnostics still go through.
    pub quiet: bool,
    /// Skips the post-write identity validation pass.
    pub no_validate: bool,
}
