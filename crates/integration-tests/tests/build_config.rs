//! BUILD_CONFIG propagation across the library and host services

use std::sync::Arc;

use probe_core::application::{ExistenceCheck, ProbeHost};
use probe_core::port::diagnostic_sink::mocks::RecordingSink;
use probe_core::port::path_query::mocks::MockPathQuery;
use probe_core::port::ExistenceProbe;
use probe_core::ProbeConfig;
use probe_infra_fs::StdPathQuery;

#[test]
fn test_shared_config_agrees_between_library_and_host() {
    for build_config in [true, false] {
        let config = ProbeConfig::new(build_config);
        let sink = Arc::new(RecordingSink::new());
        let library = ExistenceCheck::new(config, Arc::new(MockPathQuery::new()), sink.clone());
        let host = ProbeHost::new(config, Arc::new(MockPathQuery::new()));

        library.file_exists("anything");
        let mut out = Vec::new();
        host.run("probe-host", &mut out);

        let host_line = String::from_utf8(out).unwrap();
        let library_line = sink.lines().remove(0);
        if build_config {
            assert_eq!(host_line, "BUILD_CONFIG set\n");
            assert!(library_line.starts_with("BUILD_CONFIG set;"));
        } else {
            assert_eq!(host_line, "BUILD_CONFIG not set\n");
            assert!(library_line.starts_with("BUILD_CONFIG unset;"));
        }
    }
}

#[test]
fn test_compiled_flag_is_visible_to_both_crates() {
    // Feature unification: the ffi library and this test see one value
    let config = ProbeConfig::from_build();
    let host = ProbeHost::new(config, Arc::new(StdPathQuery));
    let mut out = Vec::new();

    host.run("", &mut out);

    assert_eq!(String::from_utf8(out).unwrap().trim_end(), config.flag_line());
    assert_eq!(existence_probe::probe_config(), config);
}

#[test]
fn test_host_self_probe_of_real_binary_path() {
    let program = std::env::current_exe().unwrap();
    let host = ProbeHost::new(ProbeConfig::new(true), Arc::new(StdPathQuery));

    let report = host.run(program.to_str().unwrap(), &mut Vec::new());

    assert!(report.flag_line_written);
    assert!(report.self_probe.is_present());
}
