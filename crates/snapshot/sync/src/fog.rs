//! Death-fog geometry.
//!
//! The playable area is the map minus its border on every side. Before the
//! fog starts the whole playable square is safe. From the start tick on, the
//! fog advances `speed` tiles per tick from every edge until the safe square
//! is down to its final half-size.

use snapshot_core::WorldConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeathFog {
    size: u32,
    border: u32,
    start: u64,
    final_size: u32,
    speed: f64,
}

impl DeathFog {
    pub fn new(size: u32, border: u32, config: &WorldConfig) -> Self {
        Self {
            size,
            border,
            start: config.fog_start(),
            final_size: config.fog_final_size(),
            speed: config.fog_speed(),
        }
    }

    /// Side length of the playable square.
    pub fn playable(&self) -> u32 {
        self.size.saturating_sub(self.border.saturating_mul(2))
    }

    /// Furthest the fog can advance from each edge.
    pub fn max_step(&self) -> u32 {
        self.playable().saturating_sub(self.final_size.saturating_mul(2)) / 2
    }

    /// Tiles the fog has advanced from each edge at `tick`.
    pub fn step_at(&self, tick: u64) -> u32 {
        if tick < self.start {
            return 0;
        }
        let advanced = ((tick - self.start).saturating_add(1) as f64 * self.speed).floor();
        if advanced >= f64::from(self.max_step()) {
            self.max_step()
        } else {
            advanced as u32
        }
    }

    /// Half of the safe square's side at `tick`.
    pub fn safe_half_extent(&self, tick: u64) -> u32 {
        (self.playable() / 2).saturating_sub(self.step_at(tick))
    }

    /// First and last safe row (and column) at `tick`, inclusive.
    pub fn safe_bounds(&self, tick: u64) -> Option<(u32, u32)> {
        let low = self.border.checked_add(self.step_at(tick))?;
        let high = self.size.checked_sub(low.checked_add(1)?)?;
        (low <= high).then_some((low, high))
    }

    pub fn is_safe(&self, tick: u64, r: i64, c: i64) -> bool {
        self.safe_bounds(tick).is_some_and(|(low, high)| {
            let range = i64::from(low)..=i64::from(high);
            range.contains(&r) && range.contains(&c)
        })
    }

    pub fn is_active(&self, tick: u64) -> bool {
        self.step_at(tick) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(size: u32, border: u32) -> DeathFog {
        DeathFog::new(size, border, &WorldConfig::default())
    }

    #[test]
    fn whole_playable_area_is_safe_before_start() {
        let fog = stock(160, 16);
        assert_eq!(fog.step_at(0), 0);
        assert_eq!(fog.step_at(239), 0);
        assert_eq!(fog.safe_half_extent(100), 64);
        assert_eq!(fog.safe_bounds(100), Some((16, 143)));
        assert!(fog.is_safe(100, 16, 143));
        assert!(!fog.is_safe(100, 15, 40));
    }

    #[test]
    fn shrinks_one_tile_every_sixteen_ticks() {
        let fog = stock(160, 16);
        assert_eq!(fog.step_at(240), 0);
        assert_eq!(fog.step_at(254), 0);
        assert_eq!(fog.step_at(255), 1);
        assert_eq!(fog.step_at(271), 2);
        assert!(fog.is_active(255));
        assert_eq!(fog.safe_bounds(271), Some((18, 141)));
    }

    #[test]
    fn stops_at_the_final_size() {
        let fog = stock(160, 16);
        assert_eq!(fog.max_step(), 49);
        assert_eq!(fog.step_at(1_000_000), 49);
        assert_eq!(fog.safe_half_extent(1_000_000), 15);
    }

    #[test]
    fn follows_pushed_config() {
        let config = WorldConfig {
            death_fog_start: Some(10),
            death_fog_final_size: Some(2),
            death_fog_speed: Some(1.0),
        };
        let fog = DeathFog::new(20, 2, &config);

        assert_eq!(fog.step_at(9), 0);
        assert_eq!(fog.step_at(10), 1);
        assert_eq!(fog.max_step(), 6);
        assert_eq!(fog.step_at(50), 6);
        assert_eq!(fog.safe_bounds(50), Some((8, 11)));
    }

    #[test]
    fn oversized_wire_values_do_not_overflow() {
        let config = WorldConfig {
            death_fog_start: Some(0),
            death_fog_final_size: Some(u32::MAX),
            death_fog_speed: Some(1.0),
        };
        let fog = DeathFog::new(u32::MAX, 3_000_000_000, &config);

        assert_eq!(fog.playable(), 0);
        assert_eq!(fog.max_step(), 0);
        assert_eq!(fog.step_at(u64::MAX), 0);
        assert_eq!(fog.safe_half_extent(u64::MAX), 0);
        assert_eq!(fog.safe_bounds(0), None);
        assert!(!fog.is_safe(0, 0, 0));

        let fog = DeathFog::new(u32::MAX, u32::MAX, &WorldConfig::default());
        assert_eq!(fog.safe_bounds(0), None);
    }
}
