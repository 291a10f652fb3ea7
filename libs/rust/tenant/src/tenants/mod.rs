//! Static per-DAO configuration. Each module exposes `contracts(tier)`,
//! `token(tier)` and `ui()`; the factories dispatch on the namespace.

pub mod ens;
pub mod optimism;
pub mod scroll;
pub mod syndicate;
pub mod towns;
pub mod uniswap;

use crate::{
    toggle::{TenantToggle, names},
    ui::{PageRoute, TenantLink, TenantPage},
};

fn governance_pages(dao: &str) -> Vec<TenantPage> {
    vec![
        TenantPage::new(
            PageRoute::Info,
            &format!("Welcome to {dao} governance"),
            &format!("{dao} is governed by its token holders and their delegates."),
        ),
        TenantPage::new(
            PageRoute::Delegates,
            &format!("{dao} delegates"),
            &format!("Delegates represent {dao} token holders in governance decisions."),
        ),
        TenantPage::new(
            PageRoute::Proposals,
            &format!("{dao} proposals"),
            &format!("Browse and vote on {dao} governance proposals."),
        ),
    ]
}

fn core_toggles() -> Vec<TenantToggle> {
    vec![
        TenantToggle::on(names::PROPOSALS),
        TenantToggle::on(names::DELEGATES),
        TenantToggle::on(names::INFO),
        TenantToggle::on(names::DELEGATES_EDIT),
    ]
}

fn community_links(discord: &str, forum: &str) -> Vec<TenantLink> {
    vec![
        TenantLink::new("discord", "Discord", discord),
        TenantLink::new("governance-forum", "Governance Forum", forum),
    ]
}
