pub fn get_epoch_nanos() -> u128 {
    std::time::UNIX_EPOCH
        .elapsed()
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

/// Resource IDs carry no meaning beyond "when was this rendered", so the
/// current time in nanoseconds is used.
pub fn new_resource_id() -> String {
    get_epoch_nanos().to_string()
}

pub fn epoch_nanos_to_timestamp(epoch: u128) -> Option<String> {
    let seconds = i64::try_from(epoch / 1_000_000_000).ok()?;
    let nanoseconds = (epoch % 1_000_000_000) as u32;

    let datetime = chrono::TimeZone::timestamp_opt(&chrono::Utc, seconds, nanoseconds).single()?;

    Some(datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}
