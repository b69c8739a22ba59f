//! Badge and card colour variants for every closed status enum.

use contracts::dashboards::d402_demand_forecast::Priority;
use contracts::shared::activity::ActivityStatus;
use contracts::shared::indicators::IndicatorStatus;
use contracts::shared::stock_status::StockStatus;
use contracts::system::users::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge badge--primary",
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Warning => "badge badge--warning",
            BadgeVariant::Error => "badge badge--error",
            BadgeVariant::Neutral => "badge badge--neutral",
        }
    }
}

/// Anything rendered as a coloured badge.
pub trait Badged {
    fn badge_variant(&self) -> BadgeVariant;
}

impl Badged for StockStatus {
    fn badge_variant(&self) -> BadgeVariant {
        match self {
            StockStatus::Low => BadgeVariant::Error,
            StockStatus::Normal => BadgeVariant::Warning,
            StockStatus::WellStocked => BadgeVariant::Success,
        }
    }
}

impl Badged for ActivityStatus {
    fn badge_variant(&self) -> BadgeVariant {
        match self {
            ActivityStatus::Active => BadgeVariant::Success,
            ActivityStatus::Inactive => BadgeVariant::Neutral,
        }
    }
}

impl Badged for Role {
    fn badge_variant(&self) -> BadgeVariant {
        match self {
            Role::Admin => BadgeVariant::Error,
            Role::Manager => BadgeVariant::Primary,
            Role::Staff => BadgeVariant::Neutral,
        }
    }
}

impl Badged for Priority {
    fn badge_variant(&self) -> BadgeVariant {
        match self {
            Priority::High => BadgeVariant::Error,
            Priority::Medium => BadgeVariant::Warning,
            Priority::Low => BadgeVariant::Neutral,
        }
    }
}

pub fn badge_class<B: Badged>(value: &B) -> &'static str {
    value.badge_variant().css_class()
}

pub fn stat_card_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    }
}
