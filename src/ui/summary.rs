//! Read-only summary of the submitted applicant record.

use crate::buffer::escape_html;
use crate::record::{ApplicantRecord, Field};

/// Summary card markup, inserted at the top of the chat container once the
/// session becomes active.
pub fn summary_markup(record: &ApplicantRecord) -> String {
    let mut items = String::new();
    for field in Field::ALL {
        items.push_str(&format!(
            "<div><p class=\"text-sm font-medium text-gray-500\">{}</p><p class=\"text-gray-900\">{}</p></div>",
            field.label(),
            escape_html(&record.display_value(field))
        ));
    }
    format!(
        "<div class=\"bg-white p-6 rounded-lg shadow-sm mb-6\">\
         <h3 class=\"text-lg font-semibold mb-4\">Submitted Information</h3>\
         <div class=\"grid grid-cols-1 md:grid-cols-2 gap-4\">{}</div></div>",
        items
    )
}

/// Plain `Label: value` lines for terminal display.
pub fn summary_lines(record: &ApplicantRecord) -> Vec<String> {
    let mut lines = vec!["Submitted Information".to_string()];
    lines.extend(
        Field::ALL
            .iter()
            .map(|field| format!("  {}: {}", field.label(), record.display_value(*field))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_form;
    use crate::validation::validate_form;

    #[test]
    fn test_summary_lines() {
        let record = validate_form(&sample_form()).unwrap();
        let lines = summary_lines(&record);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "  Full Name: Asha Verma");
        assert!(lines.contains(&"  Annual Family Income: ₹250000".to_string()));
        assert!(lines.contains(&"  Previous Year Percentage: 86.5%".to_string()));
    }

    #[test]
    fn test_summary_markup_lists_every_field() {
        let record = validate_form(&sample_form()).unwrap();
        let html = summary_markup(&record);
        assert!(html.contains("Submitted Information"));
        for field in Field::ALL {
            assert!(html.contains(field.label()), "missing {}", field.label());
        }
        assert!(html.contains("asha@example.com"));
    }
}
