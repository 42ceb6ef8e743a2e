/// Converts transcriptions from a source notation into the target orthography.
pub trait Transcriber: Send + Sync {
    /// Short name of the source notation, used in traces and diagnostics
    fn notation(&self) -> &str;

    /// Convert `source` into the target convention.
    ///
    /// A `clue` equal to `source` (after normalization) means the value is
    /// already in the target convention and is returned as-is.
    fn convert(&self, source: &str, clue: Option<&str>) -> String;

    /// Convert without a clue
    fn convert_plain(&self, source: &str) -> String {
        self.convert(source, None)
    }
}
