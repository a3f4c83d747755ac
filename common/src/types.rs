//! 車両・契約データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - VehicleRecord: APIが返す車両レコード
//! - RentalContract: 車両に紐づくレンタル契約（0または1件）
//! - FlattenedRow: グリッド表示用に車両と契約を1行へ展開したもの

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{Error, Result};

/// 契約日付
///
/// APIは日付のみ（`2024-01-10`）、ローカル日時（`2024-01-10T09:00:00`）、
/// オフセット付きRFC 3339のいずれかを返す。オフセット付きはUTCへ変換して保持する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RentalDate(NaiveDateTime);

impl RentalDate {
    /// 文字列から日付をパース
    ///
    /// # Errors
    /// どの形式にも一致しない場合は `Error::InvalidDate`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.naive_utc()));
        }
        if let Ok(dt) = s.parse::<NaiveDateTime>() {
            return Ok(Self(dt));
        }
        if let Ok(date) = s.parse::<NaiveDate>() {
            return Ok(Self::from_date(date));
        }
        Err(Error::InvalidDate(s.to_string()))
    }

    /// 日付の0時として作成
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// APIと同じISO形式（秒まで）
    pub fn to_iso_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

impl fmt::Display for RentalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for RentalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for RentalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RentalDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// null / 空文字列の日付は「なし」として扱う
fn deserialize_optional_date<'de, D>(deserializer: D) -> std::result::Result<Option<RentalDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => RentalDate::parse(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// レンタル契約
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalContract {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_name: String,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<RentalDate>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<RentalDate>,
}

/// 車両レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// 一意なID（行キーとして使う）
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub license_plate: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub brand: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub model: String,

    #[serde(default)]
    pub rental_contract: Option<RentalContract>,
}

/// グリッド表示用の1行
///
/// 契約がない車両は `rental_id`/日付が `None`、顧客名が空文字列になる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedRow {
    pub id: i64,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub rental_id: Option<i64>,
    pub customer_name: String,
    pub start_date: Option<RentalDate>,
    pub end_date: Option<RentalDate>,
}

impl From<&VehicleRecord> for FlattenedRow {
    fn from(vehicle: &VehicleRecord) -> Self {
        let contract = vehicle.rental_contract.as_ref();
        Self {
            id: vehicle.id,
            license_plate: vehicle.license_plate.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            rental_id: contract.and_then(|c| c.id),
            customer_name: contract.map(|c| c.customer_name.clone()).unwrap_or_default(),
            start_date: contract.and_then(|c| c.start_date),
            end_date: contract.and_then(|c| c.end_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rental_date_parse_date_only() {
        let date = RentalDate::parse("2024-01-10").unwrap();
        assert_eq!(date.date(), ymd(2024, 1, 10));
        assert_eq!(date.to_iso_string(), "2024-01-10T00:00:00");
    }

    #[test]
    fn test_rental_date_parse_naive_datetime() {
        let date = RentalDate::parse("2024-01-10T13:45:00").unwrap();
        assert_eq!(date.to_iso_string(), "2024-01-10T13:45:00");

        let with_fraction = RentalDate::parse("2024-01-10T13:45:00.123").unwrap();
        assert_eq!(with_fraction.date(), ymd(2024, 1, 10));
    }

    #[test]
    fn test_rental_date_parse_rfc3339_converts_to_utc() {
        let date = RentalDate::parse("2024-01-10T01:00:00+02:00").unwrap();
        assert_eq!(date.to_iso_string(), "2024-01-09T23:00:00");

        let zulu = RentalDate::parse("2024-01-10T00:00:00Z").unwrap();
        assert_eq!(zulu, RentalDate::from_date(ymd(2024, 1, 10)));
    }

    #[test]
    fn test_rental_date_parse_invalid() {
        let err = RentalDate::parse("10/01/2024").unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));
    }

    #[test]
    fn test_rental_date_display() {
        let date = RentalDate::parse("2024-03-05T08:00:00").unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
    }

    #[test]
    fn test_vehicle_deserialize_with_contract() {
        let json = r#"{
            "id": 7,
            "licensePlate": "XYZ-789",
            "brand": "Honda",
            "model": "Civic",
            "rentalContract": {
                "id": 101,
                "customerName": "Jane Doe",
                "startDate": "2024-01-10T00:00:00",
                "endDate": "2024-01-20"
            }
        }"#;

        let vehicle: VehicleRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(vehicle.id, 7);
        assert_eq!(vehicle.license_plate, "XYZ-789");
        let contract = vehicle.rental_contract.expect("契約がない");
        assert_eq!(contract.id, Some(101));
        assert_eq!(contract.customer_name, "Jane Doe");
        assert_eq!(contract.start_date.unwrap().date(), ymd(2024, 1, 10));
        assert_eq!(contract.end_date.unwrap().date(), ymd(2024, 1, 20));
    }

    #[test]
    fn test_vehicle_deserialize_null_contract() {
        let json = r#"{"id":42,"licensePlate":"ABC-123","brand":"Toyota","model":"Corolla","rentalContract":null}"#;
        let vehicle: VehicleRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(vehicle.brand, "Toyota");
        assert!(vehicle.rental_contract.is_none());
    }

    #[test]
    fn test_contract_nulls_and_empty_dates() {
        let json = r#"{"id":null,"customerName":null,"startDate":"","endDate":null}"#;
        let contract: RentalContract = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(contract, RentalContract::default());
    }

    #[test]
    fn test_malformed_date_fails_decoding() {
        let json = r#"{"customerName":"x","startDate":"not a date"}"#;
        assert!(serde_json::from_str::<RentalContract>(json).is_err());
    }

    #[test]
    fn test_vehicle_serialize_camel_case() {
        let vehicle = VehicleRecord {
            id: 1,
            license_plate: "AAA-111".into(),
            brand: "Mazda".into(),
            model: "3".into(),
            rental_contract: None,
        };
        let json = serde_json::to_string(&vehicle).expect("シリアライズ失敗");
        assert!(json.contains("\"licensePlate\":\"AAA-111\""));
        assert!(json.contains("\"rentalContract\":null"));
    }

    #[test]
    fn test_flatten_without_contract_uses_defaults() {
        let vehicle = VehicleRecord {
            id: 3,
            license_plate: "CCC-333".into(),
            brand: "Ford".into(),
            model: "Focus".into(),
            rental_contract: None,
        };
        let row = FlattenedRow::from(&vehicle);
        assert_eq!(row.id, 3);
        assert_eq!(row.rental_id, None);
        assert_eq!(row.customer_name, "");
        assert!(row.start_date.is_none());
        assert!(row.end_date.is_none());
    }

    #[test]
    fn test_flatten_inlines_contract_fields() {
        let vehicle = VehicleRecord {
            id: 4,
            license_plate: "DDD-444".into(),
            brand: "Kia".into(),
            model: "Rio".into(),
            rental_contract: Some(RentalContract {
                id: Some(205),
                customer_name: "john smith".into(),
                start_date: Some(RentalDate::from_date(ymd(2024, 2, 1))),
                end_date: None,
            }),
        };
        let row = FlattenedRow::from(&vehicle);
        assert_eq!(row.rental_id, Some(205));
        assert_eq!(row.customer_name, "john smith");
        assert_eq!(row.start_date.unwrap().date(), ymd(2024, 2, 1));
        assert!(row.end_date.is_none());
    }
}
