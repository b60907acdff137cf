use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::package_name::PackageName;

/// A literal substring replacement applied after the package prefix rewrite.
///
/// Rules are applied in declared order. The built-in rule set operates on
/// disjoint substrings, but order must not be assumed commutative in general.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub from: String,
    pub to: String,
}

impl RewriteRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Rewrites Java source text for the package relocation: the package
/// declaration (preserving an optional sub-package suffix), `import` and
/// `import static` prefixes, the literal sub-package rename rules, and the
/// entry-point type rename.
///
/// The transformation is purely textual. No Java grammar is parsed, so
/// correctness depends on the fixed patterns matching real occurrences only.
pub struct ContentRewriter {
    package_pattern: Regex,
    import_pattern: Regex,
    static_import_pattern: Regex,
    new_package: String,
    import_replacement: String,
    static_import_replacement: String,
    literal_rules: Vec<RewriteRule>,
    type_renames: Vec<RewriteRule>,
}

impl ContentRewriter {
    pub fn new(
        old_package: &PackageName,
        new_package: &PackageName,
        literal_rules: Vec<RewriteRule>,
        type_renames: Vec<RewriteRule>,
    ) -> Self {
        let old = regex::escape(old_package.as_str());

        // Patterns are built from an escaped package name and fixed syntax,
        // so compilation cannot fail.
        let package_pattern =
            Regex::new(&format!(r"package\s+{}(\.[A-Za-z0-9_.]+)?;", old)).unwrap();
        let import_pattern = Regex::new(&format!(r"import\s+{}", old)).unwrap();
        let static_import_pattern = Regex::new(&format!(r"import\s+static\s+{}", old)).unwrap();

        Self {
            package_pattern,
            import_pattern,
            static_import_pattern,
            new_package: new_package.to_string(),
            import_replacement: format!("import {}", new_package),
            static_import_replacement: format!("import static {}", new_package),
            literal_rules,
            type_renames,
        }
    }

    /// Apply the full rewrite to a file's content, returning the new content.
    pub fn rewrite(&self, content: &str) -> String {
        let mut out = self
            .package_pattern
            .replace_all(content, |caps: &regex::Captures| {
                let suffix = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                format!("package {}{};", self.new_package, suffix)
            })
            .into_owned();

        out = self
            .import_pattern
            .replace_all(&out, self.import_replacement.as_str())
            .into_owned();

        out = self
            .static_import_pattern
            .replace_all(&out, self.static_import_replacement.as_str())
            .into_owned();

        for rule in &self.literal_rules {
            out = out.replace(&rule.from, &rule.to);
        }

        for rename in &self.type_renames {
            if out.contains(&rename.from) {
                out = out.replace(&rename.from, &rename.to);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter(literal_rules: Vec<RewriteRule>, type_renames: Vec<RewriteRule>) -> ContentRewriter {
        let old: PackageName = "com.CarSelling.Sell.the.old.Car".parse().unwrap();
        let new: PackageName = "com.carselling.oldcar".parse().unwrap();
        ContentRewriter::new(&old, &new, literal_rules, type_renames)
    }

    #[test]
    fn test_package_declaration_without_suffix() {
        let r = rewriter(vec![], vec![]);
        let out = r.rewrite("package com.CarSelling.Sell.the.old.Car;\n");
        assert_eq!(out, "package com.carselling.oldcar;\n");
    }

    #[test]
    fn test_package_declaration_preserves_subpackage_suffix() {
        let r = rewriter(vec![], vec![]);
        let out = r.rewrite("package com.CarSelling.Sell.the.old.Car.service.chat;\n");
        assert_eq!(out, "package com.carselling.oldcar.service.chat;\n");
    }

    #[test]
    fn test_import_prefix_rewritten() {
        let r = rewriter(vec![], vec![]);
        let out = r.rewrite("import com.CarSelling.Sell.the.old.Car.repository.UserRepository;\n");
        assert_eq!(out, "import com.carselling.oldcar.repository.UserRepository;\n");
    }

    #[test]
    fn test_static_import_prefix_rewritten() {
        let r = rewriter(vec![], vec![]);
        let out = r.rewrite(
            "import static com.CarSelling.Sell.the.old.Car.security.SecurityConfig.ROLE_ADMIN;\n",
        );
        assert_eq!(
            out,
            "import static com.carselling.oldcar.security.SecurityConfig.ROLE_ADMIN;\n"
        );
    }

    #[test]
    fn test_literal_rules_applied_in_order() {
        let r = rewriter(
            vec![
                RewriteRule::new("com.carselling.oldcar.model", "com.carselling.oldcar.entity"),
                RewriteRule::new(
                    "com.carselling.oldcar.dto.UserDTO",
                    "com.carselling.oldcar.dto.auth",
                ),
            ],
            vec![],
        );
        let out = r.rewrite(
            "import com.CarSelling.Sell.the.old.Car.model.User;\n\
             import com.CarSelling.Sell.the.old.Car.dto.UserDTO.LoginRequest;\n",
        );
        assert_eq!(
            out,
            "import com.carselling.oldcar.entity.User;\n\
             import com.carselling.oldcar.dto.auth.LoginRequest;\n"
        );
    }

    #[test]
    fn test_type_rename_applies_to_declaration_and_references() {
        let r = rewriter(
            vec![],
            vec![RewriteRule::new("SellTheOldCarApplication", "OldCarApplication")],
        );
        let out = r.rewrite(
            "public class SellTheOldCarApplication {\n\
                 private static final Logger log = LoggerFactory.getLogger(\"SellTheOldCarApplication\");\n\
                 SpringApplication.run(SellTheOldCarApplication.class, args);\n\
             }\n",
        );
        assert!(out.contains("public class OldCarApplication {"));
        assert!(out.contains("getLogger(\"OldCarApplication\")"));
        assert!(out.contains("SpringApplication.run(OldCarApplication.class, args);"));
        assert!(!out.contains("SellTheOldCarApplication"));
    }

    #[test]
    fn test_unrelated_imports_untouched() {
        let r = rewriter(vec![], vec![]);
        let input = "import org.springframework.boot.SpringApplication;\n";
        assert_eq!(r.rewrite(input), input);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let r = rewriter(
            vec![RewriteRule::new(
                "com.carselling.oldcar.model",
                "com.carselling.oldcar.entity",
            )],
            vec![RewriteRule::new("SellTheOldCarApplication", "OldCarApplication")],
        );
        let input = "package com.CarSelling.Sell.the.old.Car.model;\n\
                     import com.CarSelling.Sell.the.old.Car.model.Car;\n";
        let once = r.rewrite(input);
        let twice = r.rewrite(&once);
        assert_eq!(once, twice);
    }
}
