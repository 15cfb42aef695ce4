use chrono::Utc;

fn main() {
    // ISO 8601 UTC, e.g. "2023-10-27T10:30:00Z"; shown in the page footer so
    // it is obvious which build is deployed.
    let build_timestamp_iso = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP_ISO={}",
        build_timestamp_iso
    );

    // No cargo:rerun-if-changed on purpose: the script re-runs on every
    // compilation so the timestamp stays fresh during development.
}
