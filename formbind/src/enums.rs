//! Built-in choice sets used by receiver configuration forms.

use std::fmt;

use serde_json::{Value, json};
use strum::{EnumIter, IntoStaticStr};

use crate::option::DropdownEnum;

/// FM de-emphasis time constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum WfmTauValues {
    Tau50Micro,
    Tau75Micro,
}

impl WfmTauValues {
    /// Time constant in seconds.
    pub fn seconds(&self) -> f64 {
        match self {
            WfmTauValues::Tau50Micro => 50e-6,
            WfmTauValues::Tau75Micro => 75e-6,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            WfmTauValues::Tau50Micro => "most regions",
            WfmTauValues::Tau75Micro => "Americas and South Korea",
        }
    }
}

impl fmt::Display for WfmTauValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let micros = (self.seconds() * 1e6).round() as u32;
        write!(f, "{}µs ({})", micros, self.description())
    }
}

impl DropdownEnum for WfmTauValues {
    const TYPE_NAME: &'static str = "WfmTauValues";

    fn value(&self) -> Value {
        json!(self.seconds())
    }
}

/// APRS beacon symbols for IGate stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum AprsBeaconSymbols {
    BeaconReceiveOnly,
    BeaconHfGateway,
    BeaconIgateGeneric,
    BeaconPskmail,
    BeaconTx1,
    BeaconWiresX,
    BeaconTx2,
}

impl AprsBeaconSymbols {
    /// The two-character APRS symbol (overlay + table code).
    pub fn symbol(&self) -> &'static str {
        match self {
            AprsBeaconSymbols::BeaconReceiveOnly => "R&",
            AprsBeaconSymbols::BeaconHfGateway => "/&",
            AprsBeaconSymbols::BeaconIgateGeneric => "I&",
            AprsBeaconSymbols::BeaconPskmail => "P&",
            AprsBeaconSymbols::BeaconTx1 => "T&",
            AprsBeaconSymbols::BeaconWiresX => "W&",
            AprsBeaconSymbols::BeaconTx2 => "2&",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            AprsBeaconSymbols::BeaconReceiveOnly => "Receive only IGate",
            AprsBeaconSymbols::BeaconHfGateway => "HF Gateway",
            AprsBeaconSymbols::BeaconIgateGeneric => {
                "Igate Generic (please use more specific overlay)"
            }
            AprsBeaconSymbols::BeaconPskmail => "PSKmail node",
            AprsBeaconSymbols::BeaconTx1 => "TX IGate with path set to 1 hop",
            AprsBeaconSymbols::BeaconWiresX => "Wires-X",
            AprsBeaconSymbols::BeaconTx2 => "TX IGate with path set to 2 hops",
        }
    }
}

impl fmt::Display for AprsBeaconSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.symbol())
    }
}

impl DropdownEnum for AprsBeaconSymbols {
    const TYPE_NAME: &'static str = "AprsBeaconSymbols";

    fn value(&self) -> Value {
        json!(self.symbol())
    }
}

/// Antenna direction advertised in APRS beacons.
///
/// `DirectionOmni` has no stored value: an absent direction means
/// omnidirectional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum AprsAntennaDirections {
    DirectionOmni,
    DirectionN,
    DirectionNe,
    DirectionE,
    DirectionSe,
    DirectionS,
    DirectionSw,
    DirectionW,
    DirectionNw,
}

impl AprsAntennaDirections {
    /// Compass point, `None` for omnidirectional.
    pub fn compass(&self) -> Option<&'static str> {
        match self {
            AprsAntennaDirections::DirectionOmni => None,
            AprsAntennaDirections::DirectionN => Some("N"),
            AprsAntennaDirections::DirectionNe => Some("NE"),
            AprsAntennaDirections::DirectionE => Some("E"),
            AprsAntennaDirections::DirectionSe => Some("SE"),
            AprsAntennaDirections::DirectionS => Some("S"),
            AprsAntennaDirections::DirectionSw => Some("SW"),
            AprsAntennaDirections::DirectionW => Some("W"),
            AprsAntennaDirections::DirectionNw => Some("NW"),
        }
    }
}

impl fmt::Display for AprsAntennaDirections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.compass().unwrap_or("omnidirectional"))
    }
}

impl DropdownEnum for AprsAntennaDirections {
    const TYPE_NAME: &'static str = "AprsAntennaDirections";

    fn value(&self) -> Value {
        self.compass().map_or(Value::Null, Value::from)
    }
}

/// Q65 sub-modes (tone spacing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum Q65Mode {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for Q65Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl DropdownEnum for Q65Mode {
    const TYPE_NAME: &'static str = "Q65Mode";

    fn value(&self) -> Value {
        json!(*self as u8 + 1)
    }
}

/// Transmission intervals (seconds) a Q65 decoder can be configured for.
pub const Q65_INTERVALS: [u32; 5] = [15, 30, 60, 120, 300];
