use crate::language::Language;

pub struct TypeScriptGenerator;

impl Language for TypeScriptGenerator {
    fn lang_id(&self) -> &'static str {
        "ts"
    }

    fn file_name(&self, base_name: &str) -> String {
        format!("{}.ts", base_name)
    }

    fn template(&self) -> &'static str {
        include_str!("typescript.gx")
    }
}
