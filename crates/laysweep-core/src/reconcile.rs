//! Pure reconciliation: no I/O, no side effects. The caller gathers the two
//! string collections; this module turns them into identity sets and computes
//! the ordered difference.

use laysweep_schema::{parse_directory_name, PackageIdentity};
use std::collections::HashSet;

/// Parse package identities out of a sequence of directory names.
///
/// Names that do not match the package directory grammar are skipped, and
/// duplicate identities (case variants included) collapse into one entry, so
/// the output's membership does not depend on traversal order.
pub fn collect_local_packages<I, S>(names: I) -> HashSet<PackageIdentity>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| parse_directory_name(name.as_ref()))
        .collect()
}

/// Compute the packages present locally but absent from the catalog.
///
/// The result is sorted ascending by id, then version, then chip, then
/// language (absent qualifiers before present ones, every comparison
/// case-insensitive). The order is a contract: it is both the display order
/// and the deletion order, and it is total because the four fields are
/// exactly the identity.
pub fn find_obsolete(
    catalog: &HashSet<PackageIdentity>,
    local: &HashSet<PackageIdentity>,
) -> Vec<PackageIdentity> {
    let mut obsolete: Vec<PackageIdentity> = local.difference(catalog).cloned().collect();
    obsolete.sort();
    obsolete
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str, version: &str) -> PackageIdentity {
        PackageIdentity::new(id, version, None, None)
    }

    fn set(identities: &[PackageIdentity]) -> HashSet<PackageIdentity> {
        identities.iter().cloned().collect()
    }

    #[test]
    fn equal_sets_yield_nothing() {
        let packages = set(&[identity("a", "1"), identity("b", "2")]);
        assert!(find_obsolete(&packages, &packages).is_empty());
    }

    #[test]
    fn empty_local_set_yields_nothing() {
        let catalog = set(&[identity("a", "1")]);
        assert!(find_obsolete(&catalog, &HashSet::new()).is_empty());
    }

    #[test]
    fn difference_is_sorted_by_the_composite_key() {
        let local = set(&[identity("b", "1"), identity("a", "2"), identity("a", "1")]);
        let obsolete = find_obsolete(&HashSet::new(), &local);
        let keys: Vec<_> = obsolete.iter().map(|p| (p.id(), p.version())).collect();
        assert_eq!(keys, vec![("a", "1"), ("a", "2"), ("b", "1")]);
    }

    #[test]
    fn absent_qualifiers_sort_before_present_ones() {
        let local = set(&[
            PackageIdentity::new("x", "1", Some("chip1".to_owned()), None),
            PackageIdentity::new("x", "1", None, None),
        ]);
        let obsolete = find_obsolete(&HashSet::new(), &local);
        assert_eq!(obsolete[0].chip(), None);
        assert_eq!(obsolete[1].chip(), Some("chip1"));
    }

    #[test]
    fn case_only_differences_are_not_obsolete() {
        let catalog = set(&[PackageIdentity::new(
            "PkgA",
            "1.0",
            Some("X64".to_owned()),
            Some("EN-US".to_owned()),
        )]);
        let local = set(&[PackageIdentity::new(
            "pkga",
            "1.0",
            Some("x64".to_owned()),
            Some("en-us".to_owned()),
        )]);
        assert!(find_obsolete(&catalog, &local).is_empty());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let catalog = set(&[identity("a", "1")]);
        let local = set(&[identity("a", "1"), identity("b", "2")]);
        let _ = find_obsolete(&catalog, &local);
        assert_eq!(catalog.len(), 1);
        assert_eq!(local.len(), 2);
    }

    #[test]
    fn collect_skips_names_that_do_not_match() {
        let local = collect_local_packages(["pkga,version=1.0", "not-a-package-dir", ""]);
        assert_eq!(local.len(), 1);
    }

    #[test]
    fn collect_collapses_duplicates_and_case_variants() {
        let local = collect_local_packages([
            "pkga,version=1.0",
            "pkga,version=1.0",
            "PKGA,VERSION=1.0",
        ]);
        assert_eq!(local.len(), 1);
    }

    #[test]
    fn collect_is_independent_of_traversal_order() {
        let forward = collect_local_packages(["a,version=1", "b,version=2", "junk"]);
        let backward = collect_local_packages(["junk", "b,version=2", "a,version=1"]);
        assert_eq!(forward, backward);

        let obsolete_fwd = find_obsolete(&HashSet::new(), &forward);
        let obsolete_bwd = find_obsolete(&HashSet::new(), &backward);
        assert_eq!(obsolete_fwd, obsolete_bwd);
    }

    #[test]
    fn concrete_layout_scenario() {
        let catalog = set(&[identity("pkgA", "1.0")]);
        let local = collect_local_packages([
            "pkgA,version=1.0",
            "pkgB,version=2.0,chip=x64",
            "not-a-package-dir",
        ]);

        let obsolete = find_obsolete(&catalog, &local);
        assert_eq!(obsolete.len(), 1);
        assert_eq!(obsolete[0].id(), "pkgB");
        assert_eq!(obsolete[0].version(), "2.0");
        assert_eq!(obsolete[0].chip(), Some("x64"));
        assert_eq!(obsolete[0].language(), None);
    }
}
