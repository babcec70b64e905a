use bitflags::bitflags;

bitflags! {
    /// Which parts of an [`EntityRecord`](crate::record::EntityRecord) a merge changed.
    ///
    /// Identity changes (`ent_id`, `ann_id`) are reported as `BASE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EntityFields: u16 {
        const ALIVE     = 1 << 0;
        const BASE      = 1 << 1;
        const RESOURCES = 1 << 2;
        const SKILLS    = 1 << 3;
        const METRICS   = 1 << 4;
        const INVENTORY = 1 << 5;
        const HISTORY   = 1 << 6;
        const STATUS    = 1 << 7;
        const LOADOUT   = 1 << 8;
    }
}

impl EntityFields {
    /// Parts that move the entity on the map or change what is drawn for it.
    pub const VISUAL: Self = Self::ALIVE.union(Self::BASE).union(Self::LOADOUT);

    /// Lower-case flag names, for log lines.
    pub fn labels(&self) -> Vec<String> {
        self.iter_names().map(|(name, _)| name.to_ascii_lowercase()).collect()
    }
}
