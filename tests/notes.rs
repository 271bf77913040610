use beepie::{NoteEvent, OutputFormat, count_spaces, is_sharp, parse, render};

#[test]
fn documented_examples() {
    assert_eq!(parse("A"), vec![NoteEvent(440, 0.05)]);
    assert_eq!(parse("A B"), vec![NoteEvent(440, 0.1), NoteEvent(493, 0.05)]);
    assert_eq!(parse("A-B"), vec![NoteEvent(440, 0.0), NoteEvent(493, 0.05)]);
    assert_eq!(parse("^A"), parse("A#"));
    assert_eq!(parse("^A"), vec![NoteEvent(466, 0.05)]);
    assert_eq!(parse(""), vec![]);
}

#[test]
fn letterless_input_is_empty() {
    for input in ["", " ", "---", "^#^#", "123 456", "\t\n"] {
        assert!(parse(input).is_empty(), "{input:?}");
    }
}

#[test]
fn length_bounded_by_letters() {
    for input in ["ABCDEFG", "A b C d", "Hello World", "^A# -B  zz G"] {
        let letters = input.chars().filter(|c| c.is_alphabetic()).count();
        let recognized = input.chars().filter(|c| ('A'..='G').contains(c)).count();
        let events = parse(input);
        assert!(events.len() <= letters);
        assert_eq!(events.len(), recognized);
    }
}

#[test]
fn sharpness_depends_only_on_neighbours() {
    let a: Vec<char> = "x^Cy".chars().collect();
    let b: Vec<char> = "GGGG  -^C".chars().collect();
    assert_eq!(is_sharp(&a, 2), is_sharp(&b, 8));
    assert_eq!(parse("x^Cy")[0].frequency(), parse("GGGG  -^C")[4].frequency());
}

#[test]
fn frequencies_come_from_table() {
    let table = [440, 493, 523, 587, 659, 698, 784];
    for event in parse("A B C D E F G ^A ^B ^C ^D ^E ^F ^G") {
        let natural = table.contains(&event.frequency());
        let sharp = table
            .iter()
            .any(|&f| (f as f64 * 2f64.powf(1.0 / 12.0)).round() as u32 == event.frequency());
        assert!(natural || sharp, "{event:?}");
    }
}

#[test]
fn pauses_follow_spacing() {
    let chars: Vec<char> = "A    B".chars().collect();
    assert_eq!(count_spaces(&chars, 0), 4);
    assert_eq!(parse("A    B")[0].pause(), 0.25);
}

#[test]
fn every_format_renders() {
    let events = parse("^C D-E  F#");
    for format in OutputFormat::ALL {
        let out = render(&events, format).unwrap();
        assert!(!out.is_empty(), "{format}");
    }
}
