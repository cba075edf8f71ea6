//! Shared fixtures for survey-report integration tests

use std::path::PathBuf;

pub const RESPONSES_CSV: &str = "\
docs-usual,docs-should,credit-credit_fixing_bugs,enjoyment-enjoyment_fixing_bugs,credit-credit_manage_communities,enjoyment-enjoyment_manage_communities,credit-credit_writing_code,enjoyment-enjoyment_writing_code
10,20,3,4,1,2,5,5
5,25,2,4,2,1,4,5
20,20,3,3,,2,5,4
30,10,4,5,1,1,4,4
,15,3,4,2,3,5,5
15,35,2,3,1,,5,4
";

pub const CONTRIBS_CSV: &str = "\
Filed a bug report,Wrote documentation,Reviewed a pull request,Other: gave a talk
yes,yes,no,no
yes,no,yes,no
yes,yes,yes,yes
no,yes,yes,no
yes,no,no,no
";

/// Fresh directory under the system temp dir holding both fixture tables
pub fn fixture_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "survey-report-{}-{}",
        test_name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("credit_enjoyment.csv"), RESPONSES_CSV).unwrap();
    std::fs::write(dir.join("contribs.csv"), CONTRIBS_CSV).unwrap();
    dir
}
