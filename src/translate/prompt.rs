//! System prompt for intent translation

use crate::record::{DatasetSummary, BENEFIT_COLUMN, CATEGORY_COLUMN, UNIT_COLUMN};

/// Builds the system prompt describing the plan format and the dataset
pub fn build_system_prompt(summary: &DatasetSummary) -> String {
    format!(
        r#"You translate requests about a portfolio of business projects into a JSON selection plan.

DATASET:
{context}

INSTRUCTIONS:
1. Reply with a single JSON object and nothing else.
2. If the request cannot be understood, reply with {{"operation": "include", "criteria": [], "limit": 5}}.

PLAN FORMAT:
{{
  "operation": "include" | "exclude",
  "criteria": [
    {{
      "column": "{unit}" | "{category}" | "{benefit}",
      "comparison": "contains" | "greater_than" | "less_than" | "equal_to",
      "value": "text or number"
    }}
  ],
  "sortBy": {{ "column": "{benefit}", "order": "desc" | "asc" }},
  "limit": 5
}}

- "criteria" are combined with AND and may be empty.
- "sortBy" and "limit" are optional. Only {benefit} can be sorted.
- {benefit} values are amounts; compare them with plain numbers.
- Use "exclude" to return every project except the ones described.

EXAMPLES:
"3 operations projects with the biggest savings"
{{"operation": "include", "criteria": [{{"column": "{unit}", "comparison": "contains", "value": "Operaciones"}}], "sortBy": {{"column": "{benefit}", "order": "desc"}}, "limit": 3}}

"systemic projects with benefits above 200 thousand"
{{"operation": "include", "criteria": [{{"column": "{category}", "comparison": "contains", "value": "Sistémico"}}, {{"column": "{benefit}", "comparison": "greater_than", "value": 200000}}]}}

"the 5 projects with the lowest benefit"
{{"operation": "include", "criteria": [], "sortBy": {{"column": "{benefit}", "order": "asc"}}, "limit": 5}}
"#,
        context = summary.render(),
        unit = UNIT_COLUMN,
        category = CATEGORY_COLUMN,
        benefit = BENEFIT_COLUMN,
    )
}
