use ffakit::translate_shell_script;

fn translate(script: &str) -> Vec<String> {
    translate_shell_script(script).expect("script should translate")
}

#[test]
fn names_are_stable_within_one_call() {
    assert_eq!(
        translate("A=1\nB=2\nA=3"),
        vec!["$x0 = '1';", "$x1 = '2';", "$x0 = '3';"]
    );
}

#[test]
fn non_literal_values_become_input() {
    assert_eq!(
        translate("A=$(date)\nB=\"x$HOME\"\nC=$((1 + 2))"),
        vec!["$x0 = INPUT;", "$x1 = INPUT;", "$x2 = INPUT;"]
    );
}

#[test]
fn quoted_literals_are_unquoted() {
    assert_eq!(
        translate("A='hello world'\nB=\"\"\nC=a\\ b"),
        vec!["$x0 = 'hello world';", "$x1 = '';", "$x2 = 'a b';"]
    );
}

#[test]
fn empty_assignment_allocates_no_name() {
    assert_eq!(translate("A=\nB=1"), vec!["$x0 = '1';"]);
}

#[test]
fn arrays_and_subscripts_share_the_base_name() {
    assert_eq!(
        translate("arr=(a b)\narr[1]=c\narr+=(d)"),
        vec!["$x0 = INPUT;", "$x0 = 'c';", "$x0 = INPUT;"]
    );
}

#[test]
fn prefix_assignments_follow_their_command() {
    assert_eq!(
        translate("FOO=bar make"),
        vec!["assert(! exists 'make');", "$x0 = 'bar';"]
    );
}

#[test]
fn declaration_operands_are_assignments() {
    assert_eq!(
        translate("export PATH=/usr/bin\nreadonly MODE\nf() { local DIR=out; mkdir \"$DIR\"; }"),
        vec!["$x0 = '/usr/bin';", "$x1 = 'out';", "mkdir '$DIR';"]
    );
}

#[test]
fn append_assignment_records_the_appended_value() {
    assert_eq!(translate("P=a\nP+=b"), vec!["$x0 = 'a';", "$x0 = 'b';"]);
}

#[test]
fn names_are_fresh_per_call() {
    assert_eq!(translate("Z=1"), vec!["$x0 = '1';"]);
    assert_eq!(translate("Y=1\nZ=2"), vec!["$x0 = '1';", "$x1 = '2';"]);
}
