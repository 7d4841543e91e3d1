use std::any::Any;

use arbor::{Engine, FieldDef, List, Map, Record, RecordValue, Value, impl_record};

pub fn engine() -> Engine {
    Engine::default()
}

/// A small inventory tree with nested maps and lists
pub fn inventory() -> Value {
    Value::Map(
        Map::new()
            .with("id", "top")
            .with("enabled", true)
            .with(
                "devices",
                List::new()
                    .with(Map::new().with("name", "sw0").with("ports", 48))
                    .with(
                        Map::new()
                            .with("name", "sw1")
                            .with("ports", 24)
                            .with("uplink", 10.5),
                    ),
            ),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub name: String,
    pub speed: i64,
}

impl_record!(Port { name, speed => "arbor": "mbps" });

#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    pub id: String,
    pub site: String,
}

impl_record!(Meta { id, site });

/// A record exercising every exposure rule: an embedded record, a field
/// shadowing a promoted one, a nested record, an omitted field and a
/// private field.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub meta: Meta,
    pub site: String,
    pub uplink: Port,
    pub secret: String,
    pub serial: String,
}

impl Record for Device {
    fn type_name(&self) -> &'static str {
        "Device"
    }

    fn fields(&self) -> &'static [FieldDef] {
        const FIELDS: &[FieldDef] = &[
            FieldDef::new("meta").embedded(),
            FieldDef::new("site"),
            FieldDef::new("uplink"),
            FieldDef::new("secret").annotated(&[("arbor", ",omit")]),
            FieldDef::new("serial").private(),
        ];
        FIELDS
    }

    fn get_field(&self, index: usize) -> Option<Value> {
        match index {
            0 => Some(Value::Record(RecordValue::new(self.meta.clone()))),
            1 => Some(Value::from(self.site.clone())),
            2 => Some(Value::Record(RecordValue::new(self.uplink.clone()))),
            3 => Some(Value::from(self.secret.clone())),
            4 => Some(Value::from(self.serial.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: Value) -> bool {
        match (index, value) {
            (0, Value::Record(r)) => r.downcast_ref::<Meta>().map(|m| self.meta = m.clone()).is_some(),
            (1, Value::Text(s)) => {
                self.site = s;
                true
            }
            (2, Value::Record(r)) => r
                .downcast_ref::<Port>()
                .map(|p| self.uplink = p.clone())
                .is_some(),
            _ => false,
        }
    }

    fn clone_record(&self) -> Box<dyn Record> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn device() -> Device {
    Device {
        meta: Meta {
            id: "sw0".into(),
            site: "promoted-site".into(),
        },
        site: "ams1".into(),
        uplink: Port {
            name: "eth0".into(),
            speed: 10000,
        },
        secret: "hunter2".into(),
        serial: "SN-1".into(),
    }
}

pub fn device_value() -> Value {
    Value::Record(RecordValue::new(device()))
}
