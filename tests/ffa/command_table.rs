use ffakit::translate_shell_script;

fn translate(script: &str) -> Vec<String> {
    translate_shell_script(script).expect("script should translate")
}

#[test]
fn touch_emits_one_line_per_argument() {
    assert_eq!(translate("touch a b"), vec!["touch 'a';", "touch 'b';"]);
}

#[test]
fn mkdir_and_rm_strip_flags() {
    assert_eq!(
        translate("mkdir -p a/b c\nrm -rf build\nrmdir empty"),
        vec!["mkdir 'a/b';", "mkdir 'c';", "rmr 'build';", "rmr 'empty';"]
    );
}

#[test]
fn cp_and_mv_use_the_first_two_operands() {
    assert_eq!(
        translate("cp -r src dst\nmv old new"),
        vec!["cp 'src' 'dst';", "cp 'old' 'new';", "rmr 'old';"]
    );
}

#[test]
fn copy_with_one_operand_is_skipped() {
    assert!(translate("cp only\nmv -f lonely").is_empty());
}

#[test]
fn git_clone_creates_the_repository_directory() {
    assert_eq!(
        translate("git clone https://github.com/rodneyxr/repo"),
        vec!["mkdir 'repo';"]
    );
    assert_eq!(
        translate("git clone --depth 1 -b main https://example.com/team/proj.git/"),
        vec!["mkdir 'proj.git';"]
    );
    assert!(translate("git pull\ngit clone").is_empty());
}

#[test]
fn cd_defaults_to_root() {
    assert_eq!(translate("cd\ncd /tmp"), vec!["cd '/';", "cd '/tmp';"]);
}

#[test]
fn wget_only_touches_an_explicit_output() {
    assert_eq!(
        translate("wget -q -O out.tar.gz http://example.com/a.tgz"),
        vec!["touch 'out.tar.gz';"]
    );
    assert!(translate("wget http://example.com/file.txt").is_empty());
    assert_eq!(
        translate("wget -O - http://example.com | sh"),
        vec!["assert(! exists 'sh');"]
    );
}

#[test]
fn curl_accepts_separate_and_attached_output_names() {
    assert_eq!(
        translate("curl -XGET https://google.com -O google_output"),
        vec!["touch 'google_output';"]
    );
    assert_eq!(
        translate("curl -Lfoo http://x -Oname"),
        vec!["touch 'name';"]
    );
    assert!(translate("curl -sSL http://example.com").is_empty());
}

#[test]
fn script_runners_assert_the_script() {
    assert_eq!(
        translate("source env.sh\n. ./env.sh\nfile a.bin\npython3 setup.py install"),
        vec![
            "assert(exists 'env.sh');",
            "assert(exists './env.sh');",
            "assert(exists 'a.bin');",
            "assert(exists 'setup.py');",
        ]
    );
}

#[test]
fn python_inline_code_and_modules_assert_nothing() {
    assert!(translate("python -c 'print(1)'\npython3 -m pip install x").is_empty());
}

#[test]
fn unmodeled_commands_emit_nothing() {
    assert!(translate("tar xzf a.tgz; set -e; ln -s a b").is_empty());
}

#[test]
fn unknown_commands_fall_back_to_assertions() {
    assert_eq!(
        translate("./configure\n/usr/bin/env x\n../../build.sh\nmake\n\"npm\" ci"),
        vec![
            "assert(exists './configure');",
            "assert(exists '/usr/bin/env');",
            "assert(exists '../../build.sh');",
            "assert(! exists 'make');",
            "assert(! exists 'npm');",
        ]
    );
}

#[test]
fn test_brackets_and_expanded_names_are_ignored() {
    assert!(translate("[ -f x ]\n[[ -d y ]]\n$CC -o a a.c\n\"$(which make)\" all").is_empty());
}

#[test]
fn arguments_are_literalized_best_effort() {
    assert_eq!(
        translate("touch \"$HOME/x\" 'q u'"),
        vec!["touch '$HOME/x';", "touch 'q u';"]
    );
}

#[test]
fn commands_inside_structure_are_translated() {
    let script = "build() { mkdir out; }\ncase $1 in a) touch a ;; *) touch b ;; esac\n(cd sub && make)\n! rm x | tee log";

    assert_eq!(
        translate(script),
        vec![
            "mkdir 'out';",
            "touch 'a';",
            "touch 'b';",
            "cd 'sub';",
            "assert(! exists 'make');",
            "rmr 'x';",
            "assert(! exists 'tee');",
        ]
    );
}
