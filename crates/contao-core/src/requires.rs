//! Implicit requirements of the root package

use crate::package::RootPackage;

/// The plugin's own package, required so Composer keeps it installed.
pub const PLUGIN_PACKAGE: &str = "contao-community-alliance/composer";

/// Constraint used for [`PLUGIN_PACKAGE`].
pub const PLUGIN_CONSTRAINT: &str = "*";

/// Add `name -> constraint` to the root package's requirements unless
/// `name` is already required. An existing constraint is never replaced.
///
/// Returns whether the requirement was inserted.
pub fn ensure_requirement(package: &mut RootPackage, name: &str, constraint: &str) -> bool {
    if package.requires().contains_key(name) {
        return false;
    }

    let mut requires = package.requires().clone();
    requires.insert(name.to_string(), constraint.to_string());
    package.set_requires(requires);

    tracing::debug!(package = name, constraint, "Injected requirement");
    true
}
