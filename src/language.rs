/// A host language the hierarchy can be generated in.
pub trait Language {
    fn lang_id(&self) -> &'static str;

    /// Name of the file holding the hierarchy rooted at `base_name`.
    fn file_name(&self, base_name: &str) -> String;

    /// Template source, see [`crate::glang`].
    fn template(&self) -> &'static str;

    /// Namespace / package declaration for the top of the file, if the
    /// language has one.
    fn namespace_line(&self, _namespace: &str) -> Option<String> {
        None
    }
}
