//! Exam solutions: three sittings of an international HRM paper
//!
//! Every question carries a diagram recipe and the diagram suggestion that
//! motivated it, which the document shows as a note under the image.

use crate::core::{DiagramLayout, DiagramRecipe, FishboneCategory, Record};

const JUNE_2023: &str = "June 2023";
const JUNE_2024: &str = "June 2024";
const DECEMBER_2023: &str = "December 2023";

fn strings<const N: usize>(items: [&str; N]) -> [String; N] {
    items.map(str::to_string)
}

fn table(header: [&str; 3], rows: &[[&str; 3]], col_widths: [f64; 3]) -> DiagramLayout {
    DiagramLayout::Table {
        header: header.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
        col_widths: col_widths.to_vec(),
    }
}

fn matrix(
    x_label: &str,
    y_label: &str,
    quadrants: [&str; 4],
    midpoint: Option<&str>,
) -> DiagramLayout {
    DiagramLayout::Matrix {
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        quadrants: strings(quadrants),
        midpoint: midpoint.map(str::to_string),
    }
}

fn flowchart(steps: &[&str]) -> DiagramLayout {
    DiagramLayout::Flowchart {
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

fn fishbone(effect: &str, categories: Vec<FishboneCategory>) -> DiagramLayout {
    DiagramLayout::Fishbone {
        effect: effect.to_string(),
        categories,
    }
}

fn venn(sets: [&str; 2], left_only: &str, overlap: &str, right_only: &str) -> DiagramLayout {
    DiagramLayout::Venn {
        sets: strings(sets),
        left_only: left_only.to_string(),
        overlap: overlap.to_string(),
        right_only: right_only.to_string(),
    }
}

fn composite(id: &str) -> DiagramLayout {
    DiagramLayout::Composite { id: id.to_string() }
}

fn question(
    group: &str,
    sequence: u32,
    prompt: &str,
    subtitle: &str,
    layout: DiagramLayout,
    suggestion: &str,
) -> Record {
    Record::new(group, sequence, prompt)
        .with_diagram(DiagramRecipe::new(subtitle, layout))
        .with_notes(suggestion)
}

/// The sixteen exam questions in declaration order
pub fn records() -> Vec<Record> {
    let mut records = june_2023();
    records.extend(june_2024());
    records.extend(december_2023());
    records
}

fn june_2023() -> Vec<Record> {
    vec![
        question(
            JUNE_2023,
            1,
            "1. Briefly differentiate between Domestic vs. International Human Resource Management (IHRM). Discuss and describe various approaches to International Human Resource Management and their advantages and disadvantages.",
            "DHRM vs IHRM & EPRG Framework",
            table(
                ["Parameter", "Domestic HRM (DHRM)", "International HRM (IHRM)"],
                &[
                    ["Scope", "National", "Global (Multiple Countries)"],
                    ["Activities", "Standard HR Functions", "Adds intl. tax, relocation, family support"],
                    ["Risk", "Lower (e.g., legal compliance)", "Higher (e.g., expat failure, political)"],
                ],
                [0.2, 0.4, 0.4],
            ),
            "Diagram Suggestion: A table clearly differentiating DHRM and IHRM across key parameters (scope, risk, activities, etc.). For EPRG, a 2x2 matrix or a series of diagrams showing HQ-subsidiary staffing patterns for each approach.",
        ),
        question(
            JUNE_2023,
            2,
            "2. What do you understand by Strategic International Human Resource Management? What kinds of strategies are used by MNCs to compete in global markets? Discuss with relevant examples.",
            "MNC Competitive Strategies",
            matrix(
                "Pressure for Local Responsiveness",
                "Pressure for Global Integration",
                [
                    "Global Strategy\n(High Integration,\nLow Responsiveness)",
                    "Transnational Strategy\n(High Integration,\nHigh Responsiveness)",
                    "International Strategy\n(Low Integration,\nLow Responsiveness)",
                    "Multidomestic Strategy\n(Low Integration,\nHigh Responsiveness)",
                ],
                Some("Regional\n(Mid-point)"),
            ),
            "Diagram Suggestion: A 2x2 matrix with 'Pressure for Global Integration' on one axis and 'Pressure for Local Responsiveness' on the other. The four quadrants would represent Global, Multidomestic, Transnational, and (perhaps) International (low on both, though less common as a distinct competitive strategy, often an early phase) strategies. Regional could be shown as a mid-point adaptation.",
        ),
        question(
            JUNE_2023,
            3,
            "3. \u{201c}Training in preparing and supporting personnel on international assignments is an important process.\u{201d} Describe and discuss.",
            "International Assignment Training Timeline",
            flowchart(&[
                "Pre-Departure\n(Cultural, Language,\nPractical Training)",
                "In-Country\n(Mentorship, Ongoing\nSupport, Coaching)",
                "Pre-Repatriation\n(Career Planning,\nReverse Culture Shock)",
            ]),
            "Diagram Suggestion: A timeline or flowchart showing the stages of an international assignment (Pre-Departure, In-Country, Pre-Repatriation) with the types of training and support relevant to each stage listed below.",
        ),
        question(
            JUNE_2023,
            4,
            "4. Briefly describe and discuss total reward system from the perspective of International Human Resource Management. What kinds of challenges are encountered by an expatriate in relation to taxation?",
            "Total Rewards & Taxation Challenges",
            composite("total-rewards-taxation"),
            "Diagram Suggestion: A circular diagram of 'Total Rewards' with segments for Financial (Base Salary, Incentives, Allowances) and Non-Financial (Career Dev, Recognition, Work-Life Balance). For Taxation Challenges, a world map with arrows between two countries highlighting 'Double Tax Liability' and complex 'Tax Treaties'.",
        ),
        question(
            JUNE_2023,
            5,
            "5. Discuss and describe the theories of motivation and their perspective from international context.",
            "Motivation Theories in an International Context",
            table(
                ["Theory", "Key Tenets", "Cross-Cultural Considerations"],
                &[
                    ["Maslow's Hierarchy", "Needs are hierarchical", "Hierarchy & salience of needs can vary culturally."],
                    ["Herzberg's Two-Factor", "Hygiene vs. Motivator factors", "What constitutes a motivator is culturally dependent."],
                    ["Expectancy Theory", "Effort -> Performance -> Reward", "Valence of rewards is culturally influenced."],
                    ["Equity Theory", "Fair input/output ratio vs. others", "Concept of fairness and comparison group varies."],
                ],
                [0.15, 0.35, 0.5],
            ),
            "Diagram Suggestion: A table comparing the key tenets of each motivation theory and then a column discussing its 'Cross-Cultural Applicability/Considerations.' Highlight how cultural dimensions (e.g., individualism, power distance) might moderate the effects of each theory.",
        ),
        question(
            JUNE_2023,
            6,
            "6. Describe the principles and characteristics of high performance work systems and discuss how high performance organization is related to high performance work system.",
            "Relationship between HPWS and HPO",
            composite("hpws-to-hpo"),
            "Diagram Suggestion: A diagram showing 'HPWS' (listing its characteristics/principles as inputs/components) leading to an arrow pointing to 'High Performance Organization' (listing its outcomes like superior results, adaptability, innovation).",
        ),
        question(
            JUNE_2023,
            7,
            "7. Describe and discuss the role of employer's associations from international context.",
            "Role of Employer's Associations",
            composite("employer-associations"),
            "Diagram Suggestion: A diagram showing a central 'MNC' interacting with its 'Host Country Environment.' An 'Employer Association' (national level) influences the host country IR. Above this, an 'International Employer Association' (e.g., IOE, BusinessEurope) is shown influencing 'Supranational Bodies' (e.g., EU, ILO, OECD) which in turn influence the MNC's operating environment.",
        ),
        question(
            JUNE_2023,
            8,
            "8. Identify the trends and challenges faced by International Human Resource Managers. How can they be managed?",
            "IHRM Trends, Challenges, and Strategies",
            composite("ihrm-mind-map"),
            "Diagram Suggestion: A mind map with 'IHRM' at the center. One set of branches for 'Key Trends' (Globalization, Technology, Diversity, etc.) and another set for 'Key Challenges' (Talent, Culture, Compliance, etc.). Arrows could show how trends lead to challenges. A third set of branches could show 'Management Strategies'.",
        ),
    ]
}

fn june_2024() -> Vec<Record> {
    vec![
        question(
            JUNE_2024,
            1,
            "1. Define and discuss the characteristics of International Human Resource Management. What are the similarities and differences between domestic and international human resource management?",
            "DHRM vs. IHRM",
            venn(
                ["DHRM", "IHRM"],
                "\u{2022} Single National Context\n\u{2022} Lower Risk & Complexity",
                "Core HR Functions\n(Recruit, Train, etc.)",
                "\u{2022} Multiple Countries\n\u{2022} Additional Activities (Tax)\n\u{2022} Higher Risk & Complexity",
            ),
            "Diagram Suggestion: A Venn diagram showing DHRM as one circle and IHRM as a larger, encompassing circle. The overlapping section represents 'Core HR Functions.' The unique part of the IHRM circle lists 'Additional IHRM Activities & Complexities' (e.g., Expatriate Management, Cross-Cultural Issues, International Taxation).",
        ),
        question(
            JUNE_2024,
            2,
            "2. What are the significant culture differences between individualistic society and collectivist society? Discuss the significant cultural difference between India and Turkey.",
            "Cultural Differences",
            table(
                ["Aspect", "Individualistic Society", "Collectivist Society"],
                &[
                    ["Self-Concept", "'I' identity, personal uniqueness", "'We' identity, group membership"],
                    ["Goals", "Personal achievement, self-interest", "Group goals, harmony, loyalty"],
                    ["Relationships", "Loose ties, nuclear family focus", "Strong, cohesive in-groups"],
                ],
                [0.2, 0.4, 0.4],
            ),
            "Diagram Suggestion: A two-column table contrasting 'Individualistic Society' and 'Collectivist Society' across key aspects (Self-Concept, Goals, Relationships, etc.). For India vs. Turkey, another two-column table highlighting similarities (e.g., Collectivism, High Power Distance) and then specific distinguishing features for each.",
        ),
        question(
            JUNE_2024,
            3,
            "3. Who is an expatriate? What are the qualities required to become a successful expatriate? What are the main reasons for expatriate failure?",
            "Reasons for Expatriate Failure",
            fishbone(
                "Expat Failure",
                vec![
                    FishboneCategory::new("Individual Factors", &["Inability to Adapt", "Immaturity"]),
                    FishboneCategory::new("Family Factors", &["Spouse cannot adjust", "Isolation"]),
                    FishboneCategory::new("Organizational Factors", &["Poor Selection", "Inadequate Training"]),
                    FishboneCategory::new("Host Country Factors", &["Lack of Support", "Cultural Toughness"]),
                ],
            ),
            "Diagram Suggestion: A profile of a 'Successful Expatriate' highlighting key qualities in a star or circular diagram. For 'Expatriate Failure Reasons,' a fishbone (Ishikawa) diagram with the main bone 'Expat Failure' and branches for categories like 'Individual Factors,' 'Family Factors,' 'Organizational Factors,' and 'Host Country Factors.'",
        ),
        question(
            JUNE_2024,
            4,
            "4. Explain the model of expatriate performance management. Why is it important to include hard, soft and contextual goals when assessing managerial performance?",
            "Expatriate Goal Assessment Model",
            DiagramLayout::Triangle {
                vertices: strings([
                    "Hard Goals\n(Quantitative)",
                    "Soft Goals\n(Behavioral)",
                    "Contextual Goals\n(Situational)",
                ]),
                center: "Overall\nManagerial\nPerformance".to_string(),
            },
            "Diagram Suggestion: A visual representation of the expatriate performance management model from Unit 7... For the goals, a triangle with 'Hard,' 'Soft,' and 'Contextual' goals at its vertices, with 'Overall Managerial Performance' at the center.",
        ),
        question(
            JUNE_2024,
            5,
            "5. Discuss the relationship differences in leadership and motivation across cultures to the need for careful selection of expatriate managers. Compare and contrast leadership in France with leadership in the Arab World.",
            "Leadership Comparison",
            venn(
                ["Leadership in France", "Leadership in Arab World"],
                "\u{2022} Emphasis on Intellect\n\u{2022} Formal Communication",
                "\u{2022} Hierarchical\n\u{2022} Centralized",
                "\u{2022} Paternalism\n\u{2022} Personalism/Kinship",
            ),
            "Diagram Suggestion: A world map with call-out boxes for different regions ... Or, a two-circle Venn diagram comparing 'Leadership in France' and 'Leadership in Arab World,' showing both commonalities (e.g., hierarchical aspects) and differences.",
        ),
    ]
}

fn december_2023() -> Vec<Record> {
    vec![
        question(
            DECEMBER_2023,
            1,
            "1. Describe and discuss any two cultural models and divergence and convergence of cultures.",
            "Cultural Models & Dynamics",
            composite("culture-models"),
            "Diagram Suggestion: For Hofstede, the 'Cultural Onion Model' (Values, Rituals, Heroes, Symbols). For Trompenaars, a spider-web diagram showing the seven dimensions. For Convergence/Divergence, two initially separate circles representing cultures, with arrows of 'Globalization' either pushing them to overlap (Convergence) or showing them maintaining distinct spaces despite interaction (Divergence/Crossvergence).",
        ),
        question(
            DECEMBER_2023,
            2,
            "2. Who is an expatriate? Discuss the reasons for the failures of an expatriate and how to overcome them, with examples.",
            "Expatriate Failure Reasons & Solutions",
            fishbone(
                "Expat Failure",
                vec![
                    FishboneCategory::new("Poor Selection", &[]),
                    FishboneCategory::new("Family Issues", &[]),
                    FishboneCategory::new("Cultural Inadaptability", &[]),
                    FishboneCategory::new("Lack of Training", &[]),
                ],
            ),
            "Diagram Suggestion: A cause-and-effect (fishbone) diagram showing 'Expatriate Failure' as the main effect, with branches for causes like 'Poor Selection,' 'Family Issues,' 'Cultural Inadaptability,' 'Lack of Training,' 'Insufficient Support.' For overcoming, a circular flow diagram showing 'Selection -> Training -> In-Country Support -> Repatriation Planning -> Successful Expat Cycle.'",
        ),
        question(
            DECEMBER_2023,
            3,
            "3. How can one assess the performance of International employees and what criteria could be adopted for their performance?",
            "Balanced Scorecard for IPM",
            matrix(
                "Task-Focused ('What')",
                "Behavior-Focused ('How')",
                [
                    "Contextual Criteria\n(Navigating local challenges)",
                    "Developmental Criteria\n(Learning, skill growth)",
                    "Hard Criteria\n(KPIs, sales, profit)",
                    "Soft Criteria\n(Leadership, teamwork)",
                ],
                None,
            ),
            "Diagram Suggestion: A model of IPM (similar to Unit 7) showing inputs (MNC Strategy, Assignment Task, Expat Characteristics) influencing the Expatriate Performance, which is then assessed using a 'Balanced Scorecard' type of approach with quadrants for Hard, Soft, Contextual, and Developmental criteria.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RenderRecipe;

    #[test]
    fn test_every_question_has_a_diagram_and_note() {
        let records = records();
        assert_eq!(records.len(), 16);
        for record in &records {
            assert!(matches!(record.recipe, Some(RenderRecipe::Diagram(_))));
            assert!(record
                .notes
                .as_deref()
                .is_some_and(|n| n.starts_with("Diagram Suggestion:")));
        }
    }

    #[test]
    fn test_tables_have_matching_widths() {
        for record in records() {
            if let Some(RenderRecipe::Diagram(diagram)) = &record.recipe {
                if let DiagramLayout::Table {
                    header,
                    rows,
                    col_widths,
                } = &diagram.layout
                {
                    assert_eq!(header.len(), col_widths.len());
                    assert!(rows.iter().all(|row| row.len() == header.len()));
                }
            }
        }
    }
}
