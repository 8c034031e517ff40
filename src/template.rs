//! Literal placeholder substitution. Templates are plain text carrying
//! `{{TOKEN}}` markers; rendering replaces every occurrence of each
//! recognized token and leaves anything it doesn't recognize untouched.

/// Replaces every occurrence of each `{{TOKEN}}` in `template` with its
/// paired value. Tokens present in the template but absent from
/// `substitutions` are left as-is; this is never an error.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_owned();
    for (token, value) in substitutions {
        out = out.replace(&format!("{{{{{}}}}}", token), value);
    }
    out
}

/// Site-relative link targets for a document page, computed from the
/// page's directory depth below the content root. Document pages live
/// one directory level below the site root (under the section output
/// directory), hence the extra `../` on the stylesheet and home paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelativePaths {
    pub stylesheet: String,
    pub home: String,
    pub section_index: String,
}

impl RelativePaths {
    pub fn for_depth(depth: usize) -> RelativePaths {
        RelativePaths {
            stylesheet: format!("{}styles.css", "../".repeat(depth + 1)),
            home: format!("{}index.html", "../".repeat(depth + 1)),
            section_index: format!("{}index.html", "../".repeat(depth)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        assert_eq!(
            "a and a",
            render("{{X}} and {{X}}", &[("X", "a")]),
        );
    }

    #[test]
    fn test_unknown_tokens_left_untouched() {
        assert_eq!(
            "hello {{MYSTERY}}",
            render("{{GREETING}} {{MYSTERY}}", &[("GREETING", "hello")]),
        );
    }

    #[test]
    fn test_empty_replacement() {
        assert_eq!("before  after", render("before {{GONE}} after", &[("GONE", "")]));
    }

    #[test]
    fn test_paths_at_root_depth() {
        let paths = RelativePaths::for_depth(0);
        assert_eq!("../styles.css", paths.stylesheet);
        assert_eq!("../index.html", paths.home);
        assert_eq!("index.html", paths.section_index);
    }

    #[test]
    fn test_paths_at_nested_depth() {
        let paths = RelativePaths::for_depth(3);
        assert_eq!("../../../../styles.css", paths.stylesheet);
        assert_eq!("../../../../index.html", paths.home);
        assert_eq!("../../../index.html", paths.section_index);
    }
}
