use collapsed_analyzer::aggregator::{Namespace, StackAggregator};
use collapsed_analyzer::parser::parse_line;

fn aggregate(input: &str) -> StackAggregator {
    let mut agg = StackAggregator::new();
    agg.consume(input.lines().map(|l| Ok(l.to_string()))).unwrap();
    agg
}

const PROFILE: &str = "\
java/lang/Thread.run;no/ssb/dlp/pseudo/service/pseudo/PseudoController.pseudonymize;no/ssb/dlp/pseudo/core/func/FpeFunc.apply;no/ssb/crypto/tink/fpe/Fpe.encrypt 40
java/lang/Thread.run;no/ssb/dlp/pseudo/service/pseudo/PseudoController.pseudonymize;no/ssb/dlp/pseudo/core/func/DaeadFunc.apply;com/google/crypto/tink/daead/AesSiv.encrypt;javax/crypto/Cipher.doFinal 25
java/lang/Thread.run;no/ssb/dlp/pseudo/service/pseudo/PseudoController.pseudonymize;java/util/HashMap.get 20
java/lang/Thread.run;io/netty/channel/Epoll.wait 15
broken;line notanumber

";

#[test]
fn test_total_equals_sum_of_parsed_counts() {
    let agg = aggregate(PROFILE);
    let expected: u128 = PROFILE.lines().filter_map(parse_line).map(|s| s.count).sum();

    assert_eq!(agg.total_samples, 100);
    assert_eq!(agg.total_samples, expected);
}

#[test]
fn test_leaf_totals_sum_to_total() {
    let agg = aggregate(PROFILE);
    assert_eq!(agg.leaf_totals.total(), agg.total_samples);
    assert_eq!(agg.leaf_totals.get("javax/crypto/Cipher.doFinal"), 25);
}

#[test]
fn test_namespace_totals_bounded_by_total() {
    let agg = aggregate(PROFILE);

    for namespace in Namespace::ALL {
        assert!(agg.namespace_totals(namespace).total() <= agg.total_samples);
    }

    // The epoll stack has no service frame, so the bound is strict
    assert_eq!(agg.service_totals.total(), 85);
    assert_eq!(agg.core_totals.total(), 65);
    assert_eq!(agg.tink_totals.total(), 65);
}

#[test]
fn test_namespace_frames_are_deepest_match() {
    let agg = aggregate(PROFILE);

    assert_eq!(
        agg.tink_totals.get("no/ssb/crypto/tink/fpe/Fpe.encrypt"),
        40
    );
    assert_eq!(
        agg.tink_totals.get("com/google/crypto/tink/daead/AesSiv.encrypt"),
        25
    );
    assert_eq!(
        agg.core_totals.top(1),
        vec![("no/ssb/dlp/pseudo/core/func/FpeFunc.apply", 40)]
    );
}

#[test]
fn test_deepest_core_frame_wins() {
    let agg = aggregate("root;no/ssb/dlp/pseudo/core/X;no/ssb/dlp/pseudo/core/Y 5");

    assert_eq!(agg.core_totals.get("no/ssb/dlp/pseudo/core/Y"), 5);
    assert_eq!(agg.core_totals.get("no/ssb/dlp/pseudo/core/X"), 0);
}

#[test]
fn test_malformed_line_does_not_abort() {
    let agg = aggregate("a;b;c notanumber\na;b;c 2\n");

    assert_eq!(agg.total_samples, 2);
    assert_eq!(agg.skipped_lines, 1);
}
