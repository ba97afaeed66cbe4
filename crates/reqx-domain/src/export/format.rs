use crate::lockfile::types::LockedPackage;

/// Flags that change how a single requirement line is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineOptions {
    /// Pin source packages to their version (tag) instead of the locked revision.
    pub use_tag: bool,
    /// Append `#egg=<name>` to source packages.
    pub include_egg: bool,
}

pub fn format_requirement(package: &LockedPackage, options: LineOptions) -> String {
    let mut line = match &package.source {
        Some(source) => {
            let mut spec = format!("{}+{}", source.kind, source.url);
            let reference = if options.use_tag && !package.version.is_empty() {
                Some(package.version.as_str())
            } else {
                source.reference.as_deref()
            };
            if let Some(reference) = reference {
                spec.push('@');
                spec.push_str(reference);
            }
            if options.include_egg {
                spec.push_str("#egg=");
                spec.push_str(&package.name);
            }
            spec
        }
        None => format!("{}=={}", package.name, package.version),
    };

    let marker = package.marker.without_extras().to_string();
    if !marker.is_empty() {
        line.push_str("; ");
        line.push_str(&marker);
    }
    line
}

pub fn render_requirements<'a>(
    packages: impl IntoIterator<Item = &'a LockedPackage>,
    options: LineOptions,
) -> String {
    packages
        .into_iter()
        .map(|package| format_requirement(package, options))
        .collect::<Vec<_>>()
        .join("\n")
}
