use crate::language::Language;

pub struct PythonGenerator;

impl Language for PythonGenerator {
    fn lang_id(&self) -> &'static str {
        "py"
    }

    fn file_name(&self, base_name: &str) -> String {
        format!("{}.py", base_name.to_lowercase())
    }

    fn template(&self) -> &'static str {
        include_str!("python.gx")
    }
}
