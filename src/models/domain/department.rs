use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Department {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Department {
    /// Label used in pickers, e.g. `Computer Science (CS)`.
    pub fn label(&self) -> String {
        if self.code.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_label_includes_code() {
        let dept: Department =
            serde_json::from_str(r#"{"_id":"d1","name":"Computer Science","code":"CS"}"#)
                .expect("department should deserialize");

        assert_eq!(dept.id, "d1");
        assert_eq!(dept.label(), "Computer Science (CS)");
    }

    #[test]
    fn department_label_without_code_is_name() {
        let dept: Department = serde_json::from_str(r#"{"_id":"d2","name":"Physics"}"#)
            .expect("department should deserialize");

        assert_eq!(dept.label(), "Physics");
    }
}
