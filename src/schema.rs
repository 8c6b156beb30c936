//! Registry of canonical field layouts.
//!
//! Every layout that has ever produced a settlement ID stays registered here
//! so old IDs can be re-verified. A layout is frozen once released: changing
//! field order or width means adding a new version, never editing an old one.

use crate::ContractError;

/// Canonical field ordering version produced by this build.
/// External systems should record this alongside stored settlement IDs.
pub const SCHEMA_VERSION: u32 = 1;

/// Width of a canonical account address: XDR `ScVal::Address` holding an
/// ed25519 account key.
pub const ADDRESS_WIDTH: usize = 44;

/// Total canonical buffer length for [`SCHEMA_VERSION`].
pub const CANONICAL_LEN: usize = 4 + 8 + ADDRESS_WIDTH + ADDRESS_WIDTH + 16 + 16 + 8;

/// Wire type of a single field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldKind {
    U32,
    U64,
    Address,
    I128,
    /// u64 with absent encoded as all zero bytes.
    OptionalU64,
}

impl FieldKind {
    /// Fixed encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            FieldKind::U32 => 4,
            FieldKind::U64 | FieldKind::OptionalU64 => 8,
            FieldKind::Address => ADDRESS_WIDTH,
            FieldKind::I128 => 16,
        }
    }
}

/// One row of a layout table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub offset: usize,
}

impl FieldSpec {
    pub const fn width(&self) -> usize {
        self.kind.width()
    }

    pub const fn end(&self) -> usize {
        self.offset + self.kind.width()
    }
}

/// A frozen, versioned field layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SchemaLayout {
    pub version: u32,
    pub fields: &'static [FieldSpec],
}

impl SchemaLayout {
    /// Sum of all field widths.
    pub fn canonical_len(&self) -> usize {
        self.fields.iter().map(FieldSpec::width).sum()
    }

    /// True when each field starts exactly where the previous one ends.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for field in self.fields {
            if field.offset != cursor {
                return false;
            }
            cursor = field.end();
        }
        true
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const LAYOUT_V1_FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        name: "schema_version",
        kind: FieldKind::U32,
        offset: 0,
    },
    FieldSpec {
        name: "remittance_id",
        kind: FieldKind::U64,
        offset: 4,
    },
    FieldSpec {
        name: "sender",
        kind: FieldKind::Address,
        offset: 12,
    },
    FieldSpec {
        name: "agent",
        kind: FieldKind::Address,
        offset: 12 + ADDRESS_WIDTH,
    },
    FieldSpec {
        name: "amount",
        kind: FieldKind::I128,
        offset: 12 + 2 * ADDRESS_WIDTH,
    },
    FieldSpec {
        name: "fee",
        kind: FieldKind::I128,
        offset: 28 + 2 * ADDRESS_WIDTH,
    },
    FieldSpec {
        name: "expiry",
        kind: FieldKind::OptionalU64,
        offset: 44 + 2 * ADDRESS_WIDTH,
    },
];

pub const LAYOUT_V1: SchemaLayout = SchemaLayout {
    version: 1,
    fields: &LAYOUT_V1_FIELDS,
};

/// All layouts this build can verify, oldest first.
pub const REGISTERED_LAYOUTS: &[SchemaLayout] = &[LAYOUT_V1];

/// Looks up the layout for `version`.
///
/// Fails closed: an unknown version is an error, never a fallback to the
/// current layout.
pub fn layout_for(version: u32) -> Result<&'static SchemaLayout, ContractError> {
    REGISTERED_LAYOUTS
        .iter()
        .find(|layout| layout.version == version)
        .ok_or(ContractError::SchemaVersionMismatch)
}

pub fn is_supported(version: u32) -> bool {
    layout_for(version).is_ok()
}
