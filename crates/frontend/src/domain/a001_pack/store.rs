//! In-memory pack collection shared through context.
//!
//! Every mutation replaces the collection inside the signal, so views derived
//! from `packs` recompute once per change.

use chrono::{DateTime, Utc};
use contracts::domain::a001_pack::{Pack, PackId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PacksStore {
    pub packs: RwSignal<Vec<Pack>>,
    pub is_loading: RwSignal<bool>,
}

impl PacksStore {
    pub fn new() -> Self {
        Self {
            packs: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
        }
    }

    /// Returns the number of removed packs
    pub fn remove(&self, ids: &[PackId]) -> usize {
        let mut removed = 0;
        self.packs.update(|packs| removed = remove_packs(packs, ids));
        removed
    }

    /// Returns the number of packs whose status changed
    pub fn set_disabled(&self, ids: &[PackId], disabled: bool) -> usize {
        let mut changed = 0;
        let now = Utc::now();
        self.packs
            .update(|packs| changed = set_packs_disabled(packs, ids, disabled, now));
        changed
    }

    pub fn insert(&self, name: &str, description: &str) -> Result<Pack, String> {
        let name = self
            .packs
            .with_untracked(|packs| validate_new_pack_name(packs, name))?;
        let pack = self.packs.with_untracked(|packs| {
            Pack::new_for_insert(next_pack_id(packs), name, description.trim().to_string(), Utc::now())
        });
        self.packs.update(|packs| packs.push(pack.clone()));
        Ok(pack)
    }
}

impl Default for PacksStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_packs_store() -> PacksStore {
    use_context::<PacksStore>().expect("PacksStore not found in component tree")
}

pub fn remove_packs(packs: &mut Vec<Pack>, ids: &[PackId]) -> usize {
    let before = packs.len();
    packs.retain(|p| !ids.contains(&p.id));
    before - packs.len()
}

pub fn set_packs_disabled(
    packs: &mut [Pack],
    ids: &[PackId],
    disabled: bool,
    now: DateTime<Utc>,
) -> usize {
    packs
        .iter_mut()
        .filter(|p| ids.contains(&p.id))
        .map(|p| p.set_disabled(disabled, now))
        .filter(|changed| *changed)
        .count()
}

pub fn next_pack_id(packs: &[Pack]) -> PackId {
    PackId(packs.iter().map(|p| p.id.value()).max().unwrap_or(0) + 1)
}

/// Trimmed name, or a message for the form
pub fn validate_new_pack_name(packs: &[Pack], name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Pack name must be present".to_string());
    }
    let lower = name.to_lowercase();
    if packs.iter().any(|p| p.name.to_lowercase() == lower) {
        return Err(format!("A pack named \"{}\" already exists", name));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn packs() -> Vec<Pack> {
        vec![
            Pack::new_for_insert(PackId(1), "Pack A".into(), String::new(), t0()),
            Pack::new_for_insert(PackId(4), "pack B".into(), String::new(), t0()),
            Pack::new_for_insert(PackId(2), "Compliance".into(), String::new(), t0()),
        ]
    }

    #[test]
    fn test_remove_packs() {
        let mut list = packs();
        assert_eq!(remove_packs(&mut list, &[PackId(4), PackId(99)]), 1);
        let names: Vec<_> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pack A", "Compliance"]);
    }

    #[test]
    fn test_set_packs_disabled_counts_changes() {
        let mut list = packs();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(set_packs_disabled(&mut list, &[PackId(1), PackId(2)], true, later), 2);
        assert_eq!(set_packs_disabled(&mut list, &[PackId(1), PackId(4)], true, later), 1);
        assert!(list.iter().all(|p| p.disabled));
        assert_eq!(list[0].updated_at, later);
    }

    #[test]
    fn test_next_pack_id() {
        assert_eq!(next_pack_id(&[]), PackId(1));
        assert_eq!(next_pack_id(&packs()), PackId(5));
    }

    #[test]
    fn test_validate_new_pack_name() {
        let list = packs();
        assert_eq!(validate_new_pack_name(&list, "  Vulns  "), Ok("Vulns".to_string()));
        assert!(validate_new_pack_name(&list, "   ").is_err());
        assert_eq!(
            validate_new_pack_name(&list, "PACK a"),
            Err("A pack named \"PACK a\" already exists".to_string())
        );
    }
}
