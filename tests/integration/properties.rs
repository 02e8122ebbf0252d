use gloc::{Settings, bootstrap::generate};
use gloc_domain::{BuildLayout, GlocConfig};
use gloc_ports::progress::SilentProgress;
use gloc_usecase::RunOutcome;
use proptest::prelude::*;

use crate::common::TempWorkspace;

fn generated_file() -> impl Strategy<Value = (String, String, usize)> {
    ("[a-c]{1,3}", prop_oneof![Just("rs"), Just("kt"), Just("xml"), Just("")], 0usize..12)
        .prop_map(|(stem, ext, lines)| (stem, ext.to_string(), lines))
}

fn body(lines: usize) -> String {
    "line\n".repeat(lines)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // The per-extension totals always add up to the lines of every file under the root.
    #[test]
    fn tally_sums_to_total_lines(files in proptest::collection::vec(generated_file(), 0..12)) {
        let ws = TempWorkspace::new("gloc_prop_sum");
        ws.create_dir("root");
        let mut expected = 0;
        for (index, (stem, ext, lines)) in files.iter().enumerate() {
            let name = if ext.is_empty() { stem.clone() } else { format!("{stem}.{ext}") };
            ws.create_file(&format!("root/d{index}/{name}"), &body(*lines));
            expected += lines;
        }

        let settings = Settings {
            config: GlocConfig::new([ws.join("root")]),
            layout: BuildLayout::new(ws.join("build")),
        };
        let RunOutcome::Written { report, .. } = generate(&settings, &SilentProgress).expect("run succeeds") else {
            panic!("expected a written report");
        };

        prop_assert_eq!(report.sections().len(), 1);
        prop_assert_eq!(report.sections()[0].tally.total(), expected);
        prop_assert_eq!(report.render(), ws.read("build/gloc/gloc.txt"));
    }
}
