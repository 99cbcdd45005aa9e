//! Gig platform board: account connections and the completed-order feed.
//!
//! Connecting a platform is a two-phase transition driven by the view: the
//! view calls `begin_connect`, waits on a fixed timer and then calls
//! `complete_connect`. There is no real integration behind it.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{DailyEarning, GigKind, GigOrder, GigPlatform, PlatformStatus};

use crate::mock_data::{gig_history, gig_platforms};

pub const PLATFORM_NAMES: [&str; 4] = ["Swiggy", "Zomato", "Uber", "Rapido"];
/// Simulated payouts fall in MIN..=MAX rupees
pub const SIMULATED_PAYOUT_MIN: u32 = 40;
pub const SIMULATED_PAYOUT_MAX: u32 = 139;

/// What `begin_connect` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// Platform moved to `Connecting`; the caller should schedule `complete_connect`
    Started,
    /// Already active or connecting
    Ignored,
    UnknownPlatform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GigBoard {
    orders: Vec<GigOrder>,
    platforms: Vec<GigPlatform>,
}

impl GigBoard {
    pub fn new(orders: Vec<GigOrder>, platforms: Vec<GigPlatform>) -> Self {
        Self { orders, platforms }
    }

    pub fn orders(&self) -> &[GigOrder] {
        &self.orders
    }

    pub fn platforms(&self) -> &[GigPlatform] {
        &self.platforms
    }

    /// Whether `begin_connect` would start a connection for this platform
    pub fn can_connect(&self, index: usize) -> bool {
        self.platforms
            .get(index)
            .is_some_and(|platform| matches!(platform.status, PlatformStatus::Inactive | PlatformStatus::Error))
    }

    pub fn begin_connect(&mut self, index: usize) -> ConnectOutcome {
        let Some(platform) = self.platforms.get_mut(index) else {
            return ConnectOutcome::UnknownPlatform;
        };

        match platform.status {
            PlatformStatus::Active | PlatformStatus::Connecting => {
                debug!("Ignoring connect for {} ({:?})", platform.name, platform.status);
                ConnectOutcome::Ignored
            }
            PlatformStatus::Inactive | PlatformStatus::Error => {
                info!("Connecting {}", platform.name);
                platform.status = PlatformStatus::Connecting;
                platform.last_sync = "Establishing secure link...".to_string();
                ConnectOutcome::Started
            }
        }
    }

    /// Finish a connection started by `begin_connect`. Returns false if the
    /// platform was not connecting.
    pub fn complete_connect(&mut self, index: usize) -> bool {
        match self.platforms.get_mut(index) {
            Some(platform) if platform.status == PlatformStatus::Connecting => {
                info!("{} connected", platform.name);
                platform.status = PlatformStatus::Active;
                platform.last_sync = "Synced just now".to_string();
                true
            }
            _ => false,
        }
    }

    /// Generate a random completed order and put it at the top of the feed.
    /// The caller records the amount as wallet income.
    pub fn simulate_order<R: Rng + ?Sized>(&mut self, rng: &mut R, id: u64, time_label: &str) -> GigOrder {
        let order = random_order(rng, id, time_label);
        self.push_order(order)
    }

    /// Put an order at the top of the feed. An id already in the feed is
    /// replaced with one past the largest id. Returns the stored order.
    pub fn push_order(&mut self, mut order: GigOrder) -> GigOrder {
        if self.orders.iter().any(|existing| existing.id == order.id) {
            let next = self.orders.iter().map(|existing| existing.id).max().unwrap_or(0) + 1;
            debug!("Order id {} already in feed, using {}", order.id, next);
            order.id = next;
        }
        self.orders.insert(0, order.clone());
        order
    }

    /// Sum of all orders in the feed
    pub fn todays_earnings(&self) -> f64 {
        self.orders.iter().map(|order| order.amount).sum()
    }

    pub fn active_platform_count(&self) -> usize {
        self.platforms
            .iter()
            .filter(|platform| platform.status == PlatformStatus::Active)
            .count()
    }
}

impl Default for GigBoard {
    fn default() -> Self {
        Self::new(gig_history(), gig_platforms())
    }
}

/// A completed order on a random platform with a payout in
/// `SIMULATED_PAYOUT_MIN..=SIMULATED_PAYOUT_MAX`
pub fn random_order<R: Rng + ?Sized>(rng: &mut R, id: u64, time_label: &str) -> GigOrder {
    let platform = PLATFORM_NAMES.choose(rng).copied().unwrap_or("Swiggy");
    let kind = GigKind::ALL.choose(rng).copied().unwrap_or(GigKind::Delivery);
    let amount = rng.gen_range(SIMULATED_PAYOUT_MIN..=SIMULATED_PAYOUT_MAX);

    info!("Simulated {} {} order for {}", platform, kind.label(), amount);
    GigOrder {
        id,
        platform: platform.to_string(),
        kind,
        description: "New Order • Just Now".to_string(),
        time: time_label.to_string(),
        amount: f64::from(amount),
        status: "Completed".to_string(),
    }
}

pub fn weekly_total(earnings: &[DailyEarning]) -> f64 {
    earnings.iter().map(|day| day.total).sum()
}

/// Day with the highest total, if any
pub fn best_day(earnings: &[DailyEarning]) -> Option<&DailyEarning> {
    earnings
        .iter()
        .max_by(|a, b| a.total.total_cmp(&b.total))
}

/// Weekly totals per platform, in `PLATFORM_NAMES` order
pub fn platform_totals(earnings: &[DailyEarning]) -> [(&'static str, f64); 4] {
    let mut totals = PLATFORM_NAMES.map(|name| (name, 0.0));
    for day in earnings {
        for (slot, amount) in totals.iter_mut().zip([day.swiggy, day.zomato, day.uber, day.rapido]) {
            slot.1 += amount;
        }
    }
    totals
}

/// Highest earning platform and its share of the week in whole percent
pub fn best_platform(earnings: &[DailyEarning]) -> Option<(&'static str, u32)> {
    let total = weekly_total(earnings);
    if total <= 0.0 {
        return None;
    }
    platform_totals(earnings)
        .into_iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, amount)| (name, (amount / total * 100.0).round() as u32))
}

/// Utility class for a platform's brand colour
pub fn platform_color(platform: &str) -> &'static str {
    match platform {
        "Swiggy" => "bg-orange-500",
        "Zomato" => "bg-red-500",
        "Uber" => "bg-black",
        "Rapido" => "bg-yellow-500",
        _ => "bg-gray-400",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::mock_earnings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seed_board() {
        let board = GigBoard::default();

        assert_eq!(board.orders().len(), 5);
        assert_eq!(board.todays_earnings(), 735.0);
        assert_eq!(board.active_platform_count(), 2);
    }

    #[test]
    fn test_connect_error_platform() {
        let mut board = GigBoard::default();

        assert!(board.can_connect(2));
        assert_eq!(board.begin_connect(2), ConnectOutcome::Started);
        assert!(!board.can_connect(2));
        assert_eq!(board.platforms()[2].status, PlatformStatus::Connecting);
        assert_eq!(board.platforms()[2].last_sync, "Establishing secure link...");

        assert!(board.complete_connect(2));
        assert_eq!(board.platforms()[2].status, PlatformStatus::Active);
        assert_eq!(board.platforms()[2].last_sync, "Synced just now");
    }

    #[test]
    fn test_connect_is_ignored_while_active_or_connecting() {
        let mut board = GigBoard::default();

        assert!(!board.can_connect(0));
        assert_eq!(board.begin_connect(0), ConnectOutcome::Ignored);
        assert_eq!(board.platforms()[0].last_sync, "Synced 1 min ago");

        assert_eq!(board.begin_connect(3), ConnectOutcome::Started);
        assert_eq!(board.begin_connect(3), ConnectOutcome::Ignored);
    }

    #[test]
    fn test_connect_unknown_platform() {
        let mut board = GigBoard::default();
        assert_eq!(board.begin_connect(9), ConnectOutcome::UnknownPlatform);
        assert!(!board.complete_connect(9));
    }

    #[test]
    fn test_complete_without_begin_is_rejected() {
        let mut board = GigBoard::default();
        assert!(!board.complete_connect(3));
        assert_eq!(board.platforms()[3].status, PlatformStatus::Inactive);
    }

    #[test]
    fn test_simulated_orders_stay_in_range_and_prepend() {
        let mut board = GigBoard::default();
        let mut rng = StdRng::seed_from_u64(7);

        for n in 0..200 {
            let order = board.simulate_order(&mut rng, 1_000 + n, "3:05 PM");
            assert!((40.0..=139.0).contains(&order.amount));
            assert!(PLATFORM_NAMES.contains(&order.platform.as_str()));
            assert_eq!(board.orders()[0], order);
        }
        assert_eq!(board.orders().len(), 205);
    }

    #[test]
    fn test_orders_with_same_id_stay_distinct() {
        let mut board = GigBoard::default();
        let mut rng = StdRng::seed_from_u64(3);

        let first = board.simulate_order(&mut rng, 1702516122000, "3:05 PM");
        let second = board.simulate_order(&mut rng, 1702516122000, "3:05 PM");

        assert_eq!(first.id, 1702516122000);
        assert_eq!(second.id, 1702516122001);
        assert_eq!(board.orders()[0], second);
        assert_eq!(board.orders()[1], first);
    }

    #[test]
    fn test_random_order_does_not_touch_board() {
        let board = GigBoard::default();
        let mut rng = StdRng::seed_from_u64(1);

        let order = random_order(&mut rng, 42, "9:00 AM");

        assert_eq!(order.id, 42);
        assert_eq!(order.status, "Completed");
        assert_eq!(board.orders().len(), 5);
    }

    #[test]
    fn test_weekly_summary() {
        let earnings = mock_earnings();
        assert_eq!(weekly_total(&earnings), 11750.0);
        assert_eq!(best_day(&earnings).unwrap().day, "Sat");
        assert!(best_day(&[]).is_none());
        assert_eq!(best_platform(&earnings), Some(("Swiggy", 42)));
        assert_eq!(platform_totals(&earnings)[2], ("Uber", 1650.0));
        assert!(best_platform(&[]).is_none());
    }

    #[test]
    fn test_platform_colors() {
        assert_eq!(platform_color("Uber"), "bg-black");
        assert_eq!(platform_color("Ola"), "bg-gray-400");
    }
}
