//! Static mode table: each mode maps to a visual theme and a spending profile.
//!
//! Selecting a mode only swaps which entry is read. Nothing here checks
//! transactions against the daily limit.

use shared::{AppMode, ModeProfile, Theme};

static SURVIVAL_THEME: Theme = Theme {
    name: "Survival",
    base_color: "red",
    bg_app: "bg-red-50",
    bg_panel: "bg-white",
    text_primary: "text-gray-900",
    text_secondary: "text-red-600",
    accent_color: "#ef4444",
    primary_button: "bg-red-600 hover:bg-red-700 text-white shadow-red-200",
    secondary_button: "bg-red-50 text-red-700 hover:bg-red-100",
    border: "border-red-200",
    icon_bg: "bg-red-100 text-red-600",
    nav_active: "text-red-700 bg-red-100",
    nav_inactive: "text-gray-400 hover:bg-red-50 hover:text-red-500",
};

static STABILITY_THEME: Theme = Theme {
    name: "Stability",
    base_color: "indigo",
    bg_app: "bg-gray-50",
    bg_panel: "bg-white",
    text_primary: "text-gray-900",
    text_secondary: "text-gray-500",
    accent_color: "#4f46e5",
    primary_button: "bg-indigo-600 hover:bg-indigo-700 text-white shadow-indigo-200",
    secondary_button: "bg-indigo-50 text-indigo-700 hover:bg-indigo-100",
    border: "border-gray-200",
    icon_bg: "bg-indigo-100 text-indigo-600",
    nav_active: "text-indigo-700 bg-indigo-100",
    nav_inactive: "text-gray-400 hover:bg-gray-100 hover:text-gray-600",
};

static GROWTH_THEME: Theme = Theme {
    name: "Growth",
    base_color: "emerald",
    bg_app: "bg-emerald-50/50",
    bg_panel: "bg-white",
    text_primary: "text-gray-900",
    text_secondary: "text-emerald-600",
    accent_color: "#10b981",
    primary_button: "bg-emerald-600 hover:bg-emerald-700 text-white shadow-emerald-200",
    secondary_button: "bg-emerald-50 text-emerald-700 hover:bg-emerald-100",
    border: "border-emerald-200",
    icon_bg: "bg-emerald-100 text-emerald-600",
    nav_active: "text-emerald-700 bg-emerald-100",
    nav_inactive: "text-gray-400 hover:bg-emerald-50 hover:text-emerald-500",
};

static JOY_THEME: Theme = Theme {
    name: "Joy",
    base_color: "pink",
    bg_app: "bg-pink-50/50",
    bg_panel: "bg-white",
    text_primary: "text-gray-900",
    text_secondary: "text-pink-600",
    accent_color: "#ec4899",
    primary_button: "bg-pink-500 hover:bg-pink-600 text-white shadow-pink-200",
    secondary_button: "bg-pink-50 text-pink-700 hover:bg-pink-100",
    border: "border-pink-200",
    icon_bg: "bg-pink-100 text-pink-600",
    nav_active: "text-pink-700 bg-pink-100",
    nav_inactive: "text-gray-400 hover:bg-pink-50 hover:text-pink-500",
};

static SURVIVAL_PROFILE: ModeProfile = ModeProfile {
    color: "red",
    description: "Strict Essentials Only",
    daily_limit: 250.0,
    lock_rate_percent: 60,
};

static STABILITY_PROFILE: ModeProfile = ModeProfile {
    color: "indigo",
    description: "Balanced Saving",
    daily_limit: 500.0,
    lock_rate_percent: 35,
};

static GROWTH_PROFILE: ModeProfile = ModeProfile {
    color: "emerald",
    description: "Aggressive Investing",
    daily_limit: 400.0,
    lock_rate_percent: 35,
};

static JOY_PROFILE: ModeProfile = ModeProfile {
    color: "pink",
    description: "Reward Yourself",
    daily_limit: 1200.0,
    lock_rate_percent: 15,
};

/// One row of the Smart Modes screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeCard {
    pub mode: AppMode,
    pub theme: &'static Theme,
    pub profile: &'static ModeProfile,
    pub is_active: bool,
}

pub struct ThemeService;

impl ThemeService {
    pub fn theme_for(mode: AppMode) -> &'static Theme {
        match mode {
            AppMode::Survival => &SURVIVAL_THEME,
            AppMode::Stability => &STABILITY_THEME,
            AppMode::Growth => &GROWTH_THEME,
            AppMode::Joy => &JOY_THEME,
        }
    }

    pub fn profile_for(mode: AppMode) -> &'static ModeProfile {
        match mode {
            AppMode::Survival => &SURVIVAL_PROFILE,
            AppMode::Stability => &STABILITY_PROFILE,
            AppMode::Growth => &GROWTH_PROFILE,
            AppMode::Joy => &JOY_PROFILE,
        }
    }

    /// Cards for every mode in display order, flagging the active one
    pub fn mode_cards(active: AppMode) -> Vec<ModeCard> {
        AppMode::ALL
            .iter()
            .map(|&mode| ModeCard {
                mode,
                theme: Self::theme_for(mode),
                profile: Self::profile_for(mode),
                is_active: mode == active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_matching_theme_name() {
        for mode in AppMode::ALL {
            assert_eq!(ThemeService::theme_for(mode).name, mode.name());
        }
    }

    #[test]
    fn test_daily_limits() {
        assert_eq!(ThemeService::profile_for(AppMode::Survival).daily_limit, 250.0);
        assert_eq!(ThemeService::profile_for(AppMode::Stability).daily_limit, 500.0);
        assert_eq!(ThemeService::profile_for(AppMode::Growth).daily_limit, 400.0);
        assert_eq!(ThemeService::profile_for(AppMode::Joy).daily_limit, 1200.0);
    }

    #[test]
    fn test_profile_colour_matches_theme_base_colour() {
        for mode in AppMode::ALL {
            assert_eq!(ThemeService::profile_for(mode).color, ThemeService::theme_for(mode).base_color);
        }
    }

    #[test]
    fn test_accent_colours_are_hex() {
        for mode in AppMode::ALL {
            let accent = ThemeService::theme_for(mode).accent_color;
            assert!(accent.starts_with('#') && accent.len() == 7, "{accent}");
        }
    }

    #[test]
    fn test_mode_cards_flag_only_active_mode() {
        let cards = ThemeService::mode_cards(AppMode::Joy);

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].mode, AppMode::Survival);
        assert_eq!(cards.iter().filter(|card| card.is_active).count(), 1);
        assert!(cards[3].is_active);
        assert_eq!(cards[3].profile.lock_rate_percent, 15);
    }
}
