fn main() {
    // Migrations are embedded with `sqlx::migrate!()`, so a new or edited
    // migration file has to trigger a rebuild of the library.
    println!("cargo:rerun-if-changed=migrations");
}
