// Enables `sakila_mysql_tests` when a MySQL URL is available, so the
// `#[sqlx::test]` suites run under a plain `cargo test` and are skipped
// elsewhere.
fn main() {
    println!("cargo:rustc-check-cfg=cfg(sakila_mysql_tests)");
    println!("cargo:rerun-if-env-changed=DATABASE_URL");
    if std::env::var_os("DATABASE_URL").is_some_and(|url| !url.is_empty()) {
        println!("cargo:rustc-cfg=sakila_mysql_tests");
    }
}
