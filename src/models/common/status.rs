//! 字符串状态枚举宏
//!
//! 平台内所有状态字段都以小写字符串落库。此宏统一生成
//! Display / FromStr / Serialize / Deserialize 与取值列表。

macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, ts_rs::TS)]
        #[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )*
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)*
                }
            }

            pub fn variants() -> &'static [&'static str] {
                &[$($value),*]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)*
                    _ => Err(format!("Invalid {}: {s}", stringify!($name))),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse::<$name>().map_err(|_| {
                    serde::de::Error::custom(format!(
                        "无效的 {} 取值: '{s}'. 支持: {}",
                        stringify!($name),
                        $name::variants().join(", ")
                    ))
                })
            }
        }
    };
}

pub(crate) use define_string_enum;

#[cfg(test)]
mod tests {
    define_string_enum! {
        SampleStatus {
            Draft => "draft",
            Published => "published",
        }
    }

    #[test]
    fn test_round_trip() {
        assert_eq!("draft".parse::<SampleStatus>().unwrap(), SampleStatus::Draft);
        assert_eq!(SampleStatus::Published.to_string(), "published");
    }

    #[test]
    fn test_rejects_unknown_value() {
        assert!("archived".parse::<SampleStatus>().is_err());
        let err = serde_json::from_str::<SampleStatus>("\"gone\"").unwrap_err();
        assert!(err.to_string().contains("draft, published"));
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SampleStatus::Draft).unwrap(),
            "\"draft\""
        );
    }
}
