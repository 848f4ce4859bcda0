/// 時刻取得の抽象化
///
/// アイテムIDと`createdAt`/`updatedAt`はどちらも現在時刻から生成するため、
/// テストで固定時刻を差し込めるようにトレイトで切り出している。
use chrono::{DateTime, SecondsFormat, Utc};

/// 現在時刻を返すクロック
pub trait Clock: Send + Sync {
    /// 現在時刻（UTC）を取得
    fn now(&self) -> DateTime<Utc>;
}

/// システム時刻を返すクロック（本番用）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 時刻からアイテムIDを生成（エポックからのミリ秒を10進文字列化）
///
/// 同一ミリ秒内の同時作成ではIDが衝突しうる。
pub fn millis_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}

/// 時刻をISO-8601（UTC、ミリ秒精度）文字列に変換
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use chrono::TimeZone;

    /// 常に同じ時刻を返すテスト用クロック
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        /// 2024-11-21T10:00:00Z に固定したクロック
        pub fn sample() -> Self {
            Self(Utc.with_ymd_and_hms(2024, 11, 21, 10, 0, 0).unwrap())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_millis_id_is_epoch_millis() {
        let now = Utc.timestamp_millis_opt(1732176000123).unwrap();
        assert_eq!(millis_id(now), "1732176000123");
    }

    #[test]
    fn test_iso_timestamp_format() {
        let clock = FixedClock::sample();
        assert_eq!(iso_timestamp(clock.now()), "2024-11-21T10:00:00.000Z");
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now().timestamp() > 1577836800);
    }
}
