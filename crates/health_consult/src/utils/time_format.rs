use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// 한국 표준시 (UTC+9, 서머타임 없음)
pub fn kst_timezone() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECONDS).expect("UTC+9 오프셋은 항상 유효함")
}

pub fn kst_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&kst_timezone())
}

/// DB 저장용 표준 시각 문자열
///
/// 오프셋과 밀리초 자릿수가 고정되어 있어 문자열 비교만으로 시간순 정렬이 된다.
pub fn to_standard_string(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, false)
}

pub fn now_standard_string() -> String {
    to_standard_string(&kst_now())
}

/// 저장된 시각 문자열을 KST 기준 `DateTime` 으로 해석
///
/// 스키마 기본값(`CURRENT_TIMESTAMP`, UTC, `YYYY-MM-DD HH:MM:SS`)으로 채워진 행도 받아들인다.
pub fn parse_standard_string(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&kst_timezone()));
    }
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc().with_timezone(&kst_timezone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_standard_string_is_kst_with_millis() {
        let time = kst_timezone().with_ymd_and_hms(2025, 7, 1, 9, 5, 0).unwrap();
        assert_eq!(to_standard_string(&time), "2025-07-01T09:05:00.000+09:00");
    }

    #[test]
    fn test_parse_standard_string_roundtrip() {
        let now = kst_now();
        let parsed = parse_standard_string(&to_standard_string(&now)).unwrap();
        assert_eq!(parsed.timestamp_millis(), now.timestamp_millis());
        assert_eq!(parsed.offset().local_minus_utc(), KST_OFFSET_SECONDS);
    }

    #[test]
    fn test_parse_sqlite_current_timestamp_as_utc() {
        let parsed = parse_standard_string("2025-07-01 15:30:00").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2025-07-02 00:30");
    }

    #[test]
    fn test_parse_invalid_string() {
        assert!(parse_standard_string("어제").is_none());
    }
}
