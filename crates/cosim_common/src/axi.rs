//! The fixed table of PS7 AXI interfaces and their width parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bus class of an AXI interface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum AxiClass {
    /// General-purpose port (`GP`), 32-bit data.
    GeneralPurpose,
    /// High-performance port (`HP`), 64-bit data.
    HighPerformance,
}

/// Direction of an AXI interface as seen from the processing system.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum AxiRole {
    /// The processing system initiates transactions (`M_`).
    Master,
    /// The processing system answers transactions (`S_`).
    Slave,
}

/// One of the eight AXI interfaces a PS7 stub may expose.
///
/// The declaration order is the canonical order used for every generated
/// fragment and build definition, so the derived `Ord` can be relied on by
/// ordered collections.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum AxiPort {
    /// `M_AXI_GP0`
    MGp0,
    /// `M_AXI_GP1`
    MGp1,
    /// `S_AXI_GP0`
    SGp0,
    /// `S_AXI_GP1`
    SGp1,
    /// `S_AXI_HP0`
    SHp0,
    /// `S_AXI_HP1`
    SHp1,
    /// `S_AXI_HP2`
    SHp2,
    /// `S_AXI_HP3`
    SHp3,
}

impl AxiPort {
    /// All interfaces in canonical order.
    pub const ALL: [AxiPort; 8] = [
        AxiPort::MGp0,
        AxiPort::MGp1,
        AxiPort::SGp0,
        AxiPort::SGp1,
        AxiPort::SHp0,
        AxiPort::SHp1,
        AxiPort::SHp2,
        AxiPort::SHp3,
    ];

    /// Returns the upper-case signal prefix, e.g. `M_AXI_GP0`.
    pub fn name(self) -> &'static str {
        match self {
            AxiPort::MGp0 => "M_AXI_GP0",
            AxiPort::MGp1 => "M_AXI_GP1",
            AxiPort::SGp0 => "S_AXI_GP0",
            AxiPort::SGp1 => "S_AXI_GP1",
            AxiPort::SHp0 => "S_AXI_HP0",
            AxiPort::SHp1 => "S_AXI_HP1",
            AxiPort::SHp2 => "S_AXI_HP2",
            AxiPort::SHp3 => "S_AXI_HP3",
        }
    }

    /// Returns the lower-case name used for the wrapper's formal ports.
    pub fn lower_name(self) -> &'static str {
        match self {
            AxiPort::MGp0 => "m_axi_gp0",
            AxiPort::MGp1 => "m_axi_gp1",
            AxiPort::SGp0 => "s_axi_gp0",
            AxiPort::SGp1 => "s_axi_gp1",
            AxiPort::SHp0 => "s_axi_hp0",
            AxiPort::SHp1 => "s_axi_hp1",
            AxiPort::SHp2 => "s_axi_hp2",
            AxiPort::SHp3 => "s_axi_hp3",
        }
    }

    /// Looks up an interface by its upper-case signal prefix.
    ///
    /// Returns `None` for names that fit the naming pattern but are not part
    /// of the PS7 vocabulary, such as `M_AXI_HP0` or `S_AXI_GP3`.
    pub fn from_name(name: &str) -> Option<AxiPort> {
        AxiPort::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Returns the bus class of this interface.
    pub fn class(self) -> AxiClass {
        match self {
            AxiPort::MGp0 | AxiPort::MGp1 | AxiPort::SGp0 | AxiPort::SGp1 => {
                AxiClass::GeneralPurpose
            }
            AxiPort::SHp0 | AxiPort::SHp1 | AxiPort::SHp2 | AxiPort::SHp3 => {
                AxiClass::HighPerformance
            }
        }
    }

    /// Returns the role of the processing system on this interface.
    pub fn role(self) -> AxiRole {
        match self {
            AxiPort::MGp0 | AxiPort::MGp1 => AxiRole::Master,
            _ => AxiRole::Slave,
        }
    }

    /// Returns the width parameters used when the stub does not declare this
    /// interface.
    ///
    /// General-purpose master ports default to a 12-bit ID while the slave
    /// ports default to 6 bits; this mirrors the PS7 hardware configuration.
    pub fn default_params(self) -> &'static AxiParams {
        match (self.class(), self.role()) {
            (AxiClass::GeneralPurpose, AxiRole::Master) => &AxiParams::GP_MASTER_DEFAULT,
            (AxiClass::GeneralPurpose, AxiRole::Slave) => &AxiParams::GP_SLAVE_DEFAULT,
            (AxiClass::HighPerformance, _) => &AxiParams::HP_DEFAULT,
        }
    }
}

impl fmt::Display for AxiPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the five width parameters carried per interface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum WidthField {
    /// Address bus width.
    Addr,
    /// Data bus width.
    Data,
    /// Transaction ID width.
    Id,
    /// Burst length (`AxLEN`) width.
    AxLen,
    /// Lock (`AxLOCK`) width.
    AxLock,
}

impl WidthField {
    /// All fields in the order they appear in generics and build definitions.
    pub const ALL: [WidthField; 5] = [
        WidthField::Addr,
        WidthField::Data,
        WidthField::Id,
        WidthField::AxLen,
        WidthField::AxLock,
    ];

    /// Returns the signal suffix whose vector range determines this width.
    pub fn signal(self) -> &'static str {
        match self {
            WidthField::Addr => "ARADDR",
            WidthField::Data => "RDATA",
            WidthField::Id => "RID",
            WidthField::AxLen => "ARLEN",
            WidthField::AxLock => "ARLOCK",
        }
    }

    /// Returns the parameter suffix, e.g. `ADDR_WIDTH`.
    pub fn suffix(self) -> &'static str {
        match self {
            WidthField::Addr => "ADDR_WIDTH",
            WidthField::Data => "DATA_WIDTH",
            WidthField::Id => "ID_WIDTH",
            WidthField::AxLen => "AXLEN_WIDTH",
            WidthField::AxLock => "AXLOCK_WIDTH",
        }
    }
}

/// The five width parameters of an AXI interface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct AxiParams {
    /// Address bus width in bits.
    pub addr_width: u32,
    /// Data bus width in bits.
    pub data_width: u32,
    /// Transaction ID width in bits.
    pub id_width: u32,
    /// Burst length field width in bits.
    pub axlen_width: u32,
    /// Lock field width in bits.
    pub axlock_width: u32,
}

impl AxiParams {
    /// Defaults for the general-purpose master ports.
    pub const GP_MASTER_DEFAULT: AxiParams = AxiParams {
        addr_width: 32,
        data_width: 32,
        id_width: 12,
        axlen_width: 4,
        axlock_width: 2,
    };

    /// Defaults for the general-purpose slave ports.
    pub const GP_SLAVE_DEFAULT: AxiParams = AxiParams {
        addr_width: 32,
        data_width: 32,
        id_width: 6,
        axlen_width: 4,
        axlock_width: 2,
    };

    /// Defaults for the high-performance slave ports.
    pub const HP_DEFAULT: AxiParams = AxiParams {
        addr_width: 32,
        data_width: 64,
        id_width: 6,
        axlen_width: 4,
        axlock_width: 2,
    };

    /// Returns the value of one width field.
    pub fn get(&self, field: WidthField) -> u32 {
        match field {
            WidthField::Addr => self.addr_width,
            WidthField::Data => self.data_width,
            WidthField::Id => self.id_width,
            WidthField::AxLen => self.axlen_width,
            WidthField::AxLock => self.axlock_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_ord() {
        let mut sorted = AxiPort::ALL;
        sorted.sort();
        assert_eq!(sorted, AxiPort::ALL);
    }

    #[test]
    fn names_roundtrip() {
        for port in AxiPort::ALL {
            assert_eq!(AxiPort::from_name(port.name()), Some(port));
            assert_eq!(port.lower_name(), port.name().to_lowercase());
        }
    }

    #[test]
    fn unknown_names_rejected() {
        assert_eq!(AxiPort::from_name("M_AXI_HP0"), None);
        assert_eq!(AxiPort::from_name("S_AXI_GP2"), None);
        assert_eq!(AxiPort::from_name("m_axi_gp0"), None);
    }

    #[test]
    fn classes_and_roles() {
        assert_eq!(AxiPort::MGp1.class(), AxiClass::GeneralPurpose);
        assert_eq!(AxiPort::MGp1.role(), AxiRole::Master);
        assert_eq!(AxiPort::SGp0.role(), AxiRole::Slave);
        assert_eq!(AxiPort::SHp2.class(), AxiClass::HighPerformance);
        assert_eq!(AxiPort::SHp2.role(), AxiRole::Slave);
    }

    #[test]
    fn gp_id_width_differs_by_role() {
        assert_eq!(AxiPort::MGp0.default_params().id_width, 12);
        assert_eq!(AxiPort::SGp0.default_params().id_width, 6);
        assert_eq!(AxiPort::MGp0.default_params().data_width, 32);
    }

    #[test]
    fn hp_defaults() {
        for port in [AxiPort::SHp0, AxiPort::SHp1, AxiPort::SHp2, AxiPort::SHp3] {
            assert_eq!(*port.default_params(), AxiParams::HP_DEFAULT);
        }
        assert_eq!(AxiParams::HP_DEFAULT.data_width, 64);
    }

    #[test]
    fn field_accessors() {
        let p = AxiParams::GP_MASTER_DEFAULT;
        let values: Vec<u32> = WidthField::ALL.iter().map(|f| p.get(*f)).collect();
        assert_eq!(values, vec![32, 32, 12, 4, 2]);
    }

    #[test]
    fn display_uses_signal_prefix() {
        assert_eq!(format!("{}", AxiPort::SHp3), "S_AXI_HP3");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&AxiParams::HP_DEFAULT).unwrap();
        let back: AxiParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AxiParams::HP_DEFAULT);
    }
}
