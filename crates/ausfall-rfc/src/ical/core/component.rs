//! iCalendar component types (RFC 5545 §3.4-3.6).

use super::Property;

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// Unknown/X-component.
    Unknown,
}

impl ComponentKind {
    /// Parses a component kind from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VJOURNAL" => Self::Journal,
            "VFREEBUSY" => Self::FreeBusy,
            "VTIMEZONE" => Self::Timezone,
            "VALARM" => Self::Alarm,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            _ => Self::Unknown,
        }
    }
}

/// An iCalendar component.
///
/// Components contain properties and nested sub-components, e.g. a
/// VCALENDAR holds VEVENTs which may hold VALARMs.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Component type.
    pub kind: ComponentKind,
    /// Component name as written in the source, uppercased.
    pub name: String,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested sub-components.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a component from its source name, keeping X-names intact.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into().to_ascii_uppercase();
        Self {
            kind: ComponentKind::parse(&name),
            name,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties
            .iter()
            .filter(|p| p.name == name_upper)
            .collect()
    }

    /// Returns this component and all of its descendants, depth first.
    #[must_use]
    pub fn walk(&self) -> Vec<&Component> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

/// Top-level iCalendar object wrapping the root VCALENDAR component.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl ICalendar {
    /// Returns every component in the calendar, the root included.
    #[must_use]
    pub fn walk(&self) -> Vec<&Component> {
        self.root.walk()
    }
}
