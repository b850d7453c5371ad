use serde::{Deserialize, Serialize};

/// A tracked commodity kind.
/// Determines which unit table and which seed sell price apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commodity {
    /// Gold — counted in chỉ, traded by the cây
    Gold,
    /// Silver — counted in kilograms, traded by the lượng
    Silver,
}

impl std::fmt::Display for Commodity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Commodity::Gold => write!(f, "Gold"),
            Commodity::Silver => write!(f, "Silver"),
        }
    }
}

impl Commodity {
    /// All tracked commodities, in display order.
    pub const ALL: [Commodity; 2] = [Commodity::Gold, Commodity::Silver];

    /// The unit conversion table for this commodity.
    #[must_use]
    pub fn units(&self) -> &'static UnitTable {
        match self {
            Commodity::Gold => &GOLD_UNITS,
            Commodity::Silver => &SILVER_UNITS,
        }
    }

    /// Seed sell price (per base unit), used when no persisted state exists.
    #[must_use]
    pub fn default_sell_price(&self) -> f64 {
        match self {
            Commodity::Gold => 14.5,
            Commodity::Silver => 0.5,
        }
    }
}

/// Chỉ per cây.
pub const CHI_PER_CAY: f64 = 10.0;

/// Kilograms per lượng.
pub const KG_PER_LUONG: f64 = 0.0375;

/// Maps a commodity's recognized unit labels to conversion factors into its
/// canonical base unit.
///
/// All cost arithmetic happens in the base unit; the bulk unit exists only so
/// aggregate totals can be displayed in it. Stateless and side-effect-free.
#[derive(Debug)]
pub struct UnitTable {
    /// Canonical base unit label
    pub base_unit: &'static str,
    /// Bulk display unit label
    pub bulk_unit: &'static str,
    /// Base units per one bulk unit
    pub bulk_factor: f64,
    /// Recognized labels with their factor into the base unit. Diacritic
    /// spellings found in older stored records appear as extra rows.
    factors: &'static [(&'static str, f64)],
}

static GOLD_UNITS: UnitTable = UnitTable {
    base_unit: "chi",
    bulk_unit: "cay",
    bulk_factor: CHI_PER_CAY,
    factors: &[
        ("chi", 1.0),
        ("chỉ", 1.0),
        ("cay", CHI_PER_CAY),
        ("cây", CHI_PER_CAY),
    ],
};

static SILVER_UNITS: UnitTable = UnitTable {
    base_unit: "kg",
    bulk_unit: "luong",
    bulk_factor: KG_PER_LUONG,
    factors: &[
        ("kg", 1.0),
        ("luong", KG_PER_LUONG),
        ("lượng", KG_PER_LUONG),
    ],
};

impl UnitTable {
    /// Conversion factor from `unit` into the base unit.
    ///
    /// Unrecognized labels count as already being the base unit (factor 1.0):
    /// records saved under an older unit vocabulary keep their quantity
    /// rather than failing.
    #[must_use]
    pub fn factor(&self, unit: &str) -> f64 {
        let unit = unit.trim().to_lowercase();
        self.factors
            .iter()
            .find(|(label, _)| *label == unit)
            .map_or(1.0, |&(_, factor)| factor)
    }

    /// Whether `unit` belongs to this commodity's recognized vocabulary.
    #[must_use]
    pub fn recognizes(&self, unit: &str) -> bool {
        let unit = unit.trim().to_lowercase();
        self.factors.iter().any(|(label, _)| *label == unit)
    }

    /// Convert a quantity entered in `unit` into the base unit.
    #[must_use]
    pub fn to_base(&self, qty: f64, unit: &str) -> f64 {
        qty * self.factor(unit)
    }

    /// Express a base-unit quantity in the bulk unit.
    /// Display only — never used for cost math.
    #[must_use]
    pub fn to_bulk(&self, base_qty: f64) -> f64 {
        base_qty / self.bulk_factor
    }
}
