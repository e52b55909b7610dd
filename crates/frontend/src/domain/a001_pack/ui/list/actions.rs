//! Bulk and create actions of the packs list, bound to the caller's handlers.

use crate::shared::components::table::{ButtonVariant, SelectAction};
use contracts::domain::a001_pack::PackId;
use leptos::prelude::*;

/// Operations the owner of the packs list must provide
#[derive(Clone, Copy)]
pub struct PackActionHandlers {
    pub on_remove: Callback<Vec<PackId>>,
    pub on_enable: Callback<Vec<PackId>>,
    pub on_disable: Callback<Vec<PackId>>,
    pub on_create: Callback<()>,
}

/// Standalone action that does not depend on a selection
#[derive(Clone, Copy)]
pub struct CreateAction {
    pub name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub variant: ButtonVariant,
    pub on_click: Callback<()>,
}

/// Button descriptors for one render of the packs list
#[derive(Clone)]
pub struct PackActions {
    pub primary: SelectAction<PackId>,
    pub secondary: Vec<SelectAction<PackId>>,
    pub create: CreateAction,
}

impl PackActions {
    pub fn new(handlers: &PackActionHandlers) -> Self {
        Self {
            primary: SelectAction {
                name: "delete",
                label: "Delete",
                icon: "delete",
                variant: ButtonVariant::TextIcon,
                on_click: handlers.on_remove,
            },
            secondary: vec![
                SelectAction {
                    name: "enable",
                    label: "Enable",
                    icon: "check",
                    variant: ButtonVariant::TextIcon,
                    on_click: handlers.on_enable,
                },
                SelectAction {
                    name: "disable",
                    label: "Disable",
                    icon: "disable",
                    variant: ButtonVariant::TextIcon,
                    on_click: handlers.on_disable,
                },
            ],
            create: CreateAction {
                name: "create",
                label: "Create new pack",
                icon: "plus",
                variant: ButtonVariant::Brand,
                on_click: handlers.on_create,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(&'static str, Vec<PackId>)>>>;

    fn recording_handlers(calls: &Calls) -> PackActionHandlers {
        let record = |name: &'static str| {
            let calls = calls.clone();
            Callback::new(move |ids: Vec<PackId>| calls.lock().unwrap().push((name, ids)))
        };
        let create_calls = calls.clone();
        PackActionHandlers {
            on_remove: record("remove"),
            on_enable: record("enable"),
            on_disable: record("disable"),
            on_create: Callback::new(move |_| create_calls.lock().unwrap().push(("create", Vec::new()))),
        }
    }

    #[test]
    fn test_action_metadata() {
        let calls: Calls = Arc::default();
        let actions = PackActions::new(&recording_handlers(&calls));

        let secondary: Vec<_> = actions
            .secondary
            .iter()
            .map(|a| (a.name, a.label, a.icon, a.variant))
            .collect();
        assert_eq!(
            secondary,
            vec![
                ("enable", "Enable", "check", ButtonVariant::TextIcon),
                ("disable", "Disable", "disable", ButtonVariant::TextIcon),
            ]
        );
        assert_eq!(
            (actions.primary.name, actions.primary.label, actions.primary.icon),
            ("delete", "Delete", "delete")
        );
        assert_eq!(actions.create.variant, ButtonVariant::Brand);
        assert_eq!(actions.create.label, "Create new pack");
    }

    #[test]
    fn test_actions_run_the_bound_handlers() {
        let calls: Calls = Arc::default();
        let actions = PackActions::new(&recording_handlers(&calls));

        actions.secondary[0].on_click.run(vec![PackId(1)]);
        actions.secondary[1].on_click.run(vec![PackId(2), PackId(3)]);
        actions.primary.on_click.run(vec![PackId(4)]);
        actions.create.on_click.run(());

        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                ("enable", vec![PackId(1)]),
                ("disable", vec![PackId(2), PackId(3)]),
                ("remove", vec![PackId(4)]),
                ("create", Vec::new()),
            ]
        );
    }
}
