use remaplut_core::alphabet::{symbol_to_index, BitIndex};
use remaplut_core::remap::{RemapTable, SLOTS};
use remaplut_core::{OutputWidth, RemapError};

fn idx(i: u8) -> Option<BitIndex> {
    BitIndex::new(i)
}

#[test]
fn new_table_has_no_sources() {
    let t = RemapTable::new();
    assert!(t.slots().iter().all(|s| s.is_none()));
}

#[test]
fn line_grammar_drops_terminator_and_reverses() {
    let mut t = RemapTable::new();
    t.load_line(b"10-\n").unwrap();
    assert_eq!(t.slot(2), idx(1));
    assert_eq!(t.slot(1), idx(0));
    assert_eq!(t.slot(0), None);
    for i in 3..SLOTS {
        assert_eq!(t.slot(i), None);
    }
}

#[test]
fn line_grammar_writes_decoded_symbol_per_position() {
    let specs: [&[u8]; 4] = [b"7654321\n", b"A-9z+/\n", b"x\n", b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+\n"];
    for spec in specs {
        let mut t = RemapTable::identity();
        let before = t.clone();
        t.load_line(spec).unwrap();

        let l = spec.len();
        for i in 0..l - 1 {
            assert_eq!(t.slot(l - 2 - i), symbol_to_index(spec[i]).unwrap());
        }
        for i in l - 1..SLOTS {
            assert_eq!(t.slot(i), before.slot(i), "slot {i} must be untouched");
        }
    }
}

#[test]
fn successive_updates_only_overwrite_covered_slots() {
    let mut t = RemapTable::new();
    t.load_line(b"10-\n").unwrap();
    t.load_line(b"01\n").unwrap();
    assert_eq!(t.slot(2), idx(1));
    assert_eq!(t.slot(1), idx(0));
    assert_eq!(t.slot(0), idx(1));
}

#[test]
fn terminator_only_line_changes_nothing() {
    let mut t = RemapTable::identity();
    t.load_line(b"\n").unwrap();
    assert_eq!(t, RemapTable::identity());
}

#[test]
fn length_limits() {
    let mut t = RemapTable::new();
    assert!(matches!(t.load_line(b""), Err(RemapError::TooShort)));
    assert!(matches!(t.load_spec(b""), Err(RemapError::TooShort)));

    let long = vec![b'0'; 65];
    assert!(matches!(
        t.load_line(&long),
        Err(RemapError::TooLong { len: 65 })
    ));
    assert!(matches!(
        t.load_spec(&long),
        Err(RemapError::TooLong { len: 65 })
    ));

    let max = vec![b'0'; 64];
    t.load_line(&max).unwrap();
    t.load_spec(&max).unwrap();
}

#[test]
fn invalid_symbol_reports_character_and_leaves_table_unchanged() {
    let mut t = RemapTable::identity();
    match t.load_line(b"01*3\n") {
        Err(RemapError::InvalidSymbol { symbol }) => assert_eq!(symbol, b'*'),
        other => panic!("expected InvalidSymbol, got {other:?}"),
    }
    assert_eq!(t, RemapTable::identity());

    // A terminator in the middle of a direct string is not a symbol.
    assert!(matches!(
        t.load_spec(b"01\n"),
        Err(RemapError::InvalidSymbol { symbol: b'\n' })
    ));
}

#[test]
fn direct_grammar_keeps_last_symbol() {
    let mut t = RemapTable::new();
    t.load_spec(b"10-").unwrap();
    assert_eq!(t.slot(2), idx(1));
    assert_eq!(t.slot(1), idx(0));
    assert_eq!(t.slot(0), None);

    let mut u = RemapTable::new();
    u.load_spec(b"10").unwrap();
    assert_eq!(u.slot(1), idx(1));
    assert_eq!(u.slot(0), idx(0));
}

#[test]
fn direct_grammar_full_width_identity() {
    let mut spec: Vec<u8> = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/".to_vec();
    spec.reverse();
    let mut t = RemapTable::new();
    t.load_spec(&spec).unwrap();
    assert_eq!(t, RemapTable::identity());
}

#[test]
fn echo_prints_width_slice_msb_first() {
    let mut t = RemapTable::new();
    t.load_line(b"10-\n").unwrap();
    assert_eq!(t.echo(OutputWidth::W8), "//-----10-");
    assert_eq!(t.echo(OutputWidth::W16), format!("//{}10-", "-".repeat(13)));

    let id = RemapTable::identity();
    assert_eq!(id.echo(OutputWidth::W8), "//76543210");
    assert_eq!(
        id.echo(OutputWidth::W64),
        "///+zyxwvutsrqponmlkjihgfedcbaZYXWVUTSRQPONMLKJIHGFEDCBA9876543210"
    );
}

#[test]
fn echo_reloads_to_same_table() {
    let mut t = RemapTable::new();
    t.load_spec(b"3-0/Ab-9Z8+x7--2").unwrap();

    for width in [OutputWidth::W8, OutputWidth::W16, OutputWidth::W32] {
        let echo = t.echo(width);
        let mut line = echo.strip_prefix("//").unwrap().as_bytes().to_vec();
        line.push(b'\n');

        let mut back = RemapTable::new();
        back.load_line(&line).unwrap();
        for i in 0..width.bits() as usize {
            assert_eq!(back.slot(i), t.slot(i), "width={width} slot={i}");
        }
    }
}

#[test]
fn full_width_echo_needs_direct_grammar() {
    let mut t = RemapTable::new();
    t.load_spec(b"/0-1").unwrap();

    let echo = t.echo(OutputWidth::W64);
    let symbols = echo.strip_prefix("//").unwrap().as_bytes();
    assert_eq!(symbols.len(), 64);

    let mut line = symbols.to_vec();
    line.push(b'\n');
    assert!(matches!(
        RemapTable::new().load_line(&line),
        Err(RemapError::TooLong { len: 65 })
    ));

    let mut back = RemapTable::new();
    back.load_spec(symbols).unwrap();
    assert_eq!(back, t);
}
