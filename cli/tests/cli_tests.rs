#[test]
fn empirical() {
    trycmd::TestCases::new()
        .case("tests/empirical/*.toml")
        .env("STATEFREQS_ALLOW_STDIN", "true")
        .default_bin_name("statefreqs");
}

#[test]
fn equal() {
    trycmd::TestCases::new()
        .case("tests/equal/*.toml")
        .env("STATEFREQS_ALLOW_STDIN", "true")
        .default_bin_name("statefreqs");
}

#[test]
fn random() {
    trycmd::TestCases::new()
        .case("tests/random/*.toml")
        .env("STATEFREQS_ALLOW_STDIN", "true")
        .default_bin_name("statefreqs");
}

#[test]
fn read() {
    trycmd::TestCases::new()
        .case("tests/read/*.toml")
        .env("STATEFREQS_ALLOW_STDIN", "true")
        .default_bin_name("statefreqs");
}

#[test]
fn user() {
    trycmd::TestCases::new()
        .case("tests/user/*.toml")
        .env("STATEFREQS_ALLOW_STDIN", "true")
        .default_bin_name("statefreqs");
}
