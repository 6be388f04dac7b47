//! Extension-to-boilerplate template registry.
//!
//! A pure lookup table: built-in templates for common extensions, optionally
//! overlaid with entries from the user's config. Lookups never fail; unknown
//! extensions fall back to a generic greeting.

use std::collections::HashMap;

use drover_config::DroverConfig;

/// Boilerplate returned for extensions nobody registered.
pub const GENERIC_TEMPLATE: &str = "Hello World!\n";

/// Immutable extension → boilerplate table, built once at startup.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<String, String>,
}

impl TemplateRegistry {
    /// Registry with only the built-in templates.
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        let mut add = |ext: &str, body: &str| {
            templates.insert(ext.to_string(), body.to_string());
        };

        add("js", "console.log('Hello World!');\n");
        add("py", "print('Hello World!')\n");
        add(
            "go",
            "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello World!\")\n}\n",
        );
        add(
            "rs",
            "fn main() {\n    println!(\"Hello World!\");\n}\n",
        );
        add(
            "java",
            "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello World!\");\n    }\n}\n",
        );
        add(
            "cpp",
            "#include <iostream>\n\nint main() {\n    std::cout << \"Hello World!\" << std::endl;\n    return 0;\n}\n",
        );
        add(
            "html",
            "<!DOCTYPE html>\n<html>\n<head>\n    <title>Hello</title>\n</head>\n<body>\n    <h1>Hello World!</h1>\n</body>\n</html>\n",
        );
        add(
            "css",
            "body {\n    font-family: Arial, sans-serif;\n    margin: 0;\n    padding: 20px;\n}\n",
        );
        add("md", "# Hello World\n\nThis is a markdown file.\n");
        add("txt", "Hello World!\n\nThis is a text file.\n");

        Self { templates }
    }

    /// Built-in templates overlaid with the config's `[templates]` entries.
    pub fn from_config(config: &DroverConfig) -> Self {
        let mut registry = Self::builtin();
        if let Some(overrides) = &config.templates {
            for (ext, body) in overrides {
                registry
                    .templates
                    .insert(ext.to_lowercase(), body.clone());
            }
        }
        registry
    }

    /// Default boilerplate for an extension.
    ///
    /// Exact lookup by lower-cased extension; unknown or absent extensions
    /// get [`GENERIC_TEMPLATE`]. Never fails.
    pub fn resolve(&self, extension: Option<&str>) -> &str {
        extension
            .and_then(|ext| self.templates.get(&ext.to_lowercase()))
            .map(String::as_str)
            .unwrap_or(GENERIC_TEMPLATE)
    }

    /// Default boilerplate for a filename, keyed on its extension.
    pub fn resolve_for_filename(&self, filename: &str) -> &str {
        self.resolve(extension_of(filename))
    }

    /// Registered extensions, sorted, for display.
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Template body for a known extension, for display.
    pub fn get(&self, extension: &str) -> Option<&str> {
        self.templates
            .get(&extension.to_lowercase())
            .map(String::as_str)
    }
}

/// Extension of a filename, if it has one.
fn extension_of(filename: &str) -> Option<&str> {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extension_lookup() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.resolve(Some("py")).contains("print"));
        assert!(registry.resolve(Some("go")).contains("package main"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.resolve(Some("PY")), registry.resolve(Some("py")));
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.resolve(Some("zig")), GENERIC_TEMPLATE);
        assert_eq!(registry.resolve(None), GENERIC_TEMPLATE);
    }

    #[test]
    fn test_resolve_for_filename() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.resolve_for_filename("main.py").contains("print"));
        assert_eq!(registry.resolve_for_filename("Makefile"), GENERIC_TEMPLATE);
        // Dotfiles have no extension in the template sense
        assert_eq!(registry.resolve_for_filename(".gitignore"), GENERIC_TEMPLATE);
    }

    #[test]
    fn test_config_overrides_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert("py".to_string(), "#!/usr/bin/env python3\n".to_string());
        overrides.insert("ZIG".to_string(), "const std = @import(\"std\");\n".to_string());
        let config = DroverConfig {
            templates: Some(overrides),
            ..Default::default()
        };
        let registry = TemplateRegistry::from_config(&config);
        assert_eq!(registry.resolve(Some("py")), "#!/usr/bin/env python3\n");
        assert!(registry.resolve(Some("zig")).contains("@import"));
        // Untouched entries keep their builtin bodies
        assert!(registry.resolve(Some("md")).contains("Hello World"));
    }
}
