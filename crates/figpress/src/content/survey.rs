//! Customer survey: twenty questions from a life-insurer loyalty study
//!
//! Question 7 is multi-select and charted as bars against the 100
//! respondents; question 20 is open-ended and has no chart.

use crate::core::{ChartRecipe, Record};

const DEMOGRAPHICS: &str = "Section A: Demographic Profile";
const ENGAGEMENT: &str = "Section B: Customer Engagement";
const LOYALTY: &str = "Section C: Customer Loyalty";
const RETENTION: &str = "Section D: Customer Retention";
const OPEN_ENDED: &str = "Open-ended Question";

fn pie(group: &str, sequence: u32, prompt: &str, data: &[(&str, u32)], reading: &str) -> Record {
    Record::new(group, sequence, prompt)
        .with_chart(ChartRecipe::pie(data))
        .with_text(reading)
}

/// The twenty survey questions in declaration order
pub fn records() -> Vec<Record> {
    vec![
        pie(
            DEMOGRAPHICS,
            1,
            "Age",
            &[("Under 25", 5), ("26-35", 30), ("36-45", 35), ("46-55", 20), ("Above 55", 10)],
            "The age distribution of individuals in this dataset offers valuable insights into the composition of the population, particularly regarding the potential preferences, needs, and motivations of different age groups. The largest proportion of people falls within the 36\u{2013}45 age group, accounting for 35% of the total, followed closely by those in the 26\u{2013}35 range (30%). Individuals aged 46\u{2013}55 make up 20%, while those above 55 and under 25 represent smaller segments, each comprising 10% and 5% respectively.",
        ),
        pie(
            DEMOGRAPHICS,
            2,
            "Gender",
            &[("Male", 58), ("Female", 42)],
            "The respondent pool shows a slight male majority, with men constituting 58% and women 42% of the participants. This distribution suggests that while both genders are represented, insights might be slightly more reflective of male customer perspectives within this specific sample from the Kollam District.",
        ),
        pie(
            DEMOGRAPHICS,
            3,
            "Occupation",
            &[("Student", 10), ("Salaried", 45), ("Business", 20), ("Retired", 15), ("Others", 10)],
            "Salaried individuals form the largest segment of respondents at 45%, indicating that employed professionals are a significant customer base for ICICI Prudential in this survey. Business owners (20%) and retired individuals (15%) also represent substantial portions, while students and 'Others' constitute smaller groups (10% each).",
        ),
        pie(
            DEMOGRAPHICS,
            4,
            "Duration of association with ICICI Prudential",
            &[
                ("Less than 1 year", 25),
                ("1-3 years", 25),
                ("3-5 years", 20),
                ("More than 5 years", 30),
            ],
            "The customer tenure is varied. While the largest single group (30%) consists of long-term customers associated for more than 5 years, there is a significant presence of newer customers, with those associated for less than 1 year and 1-3 years each accounting for 25%. This indicates a mix of established loyalty and recent customer acquisition.",
        ),
        pie(
            DEMOGRAPHICS,
            5,
            "Type of policy held",
            &[
                ("Life Insurance", 5),
                ("ULIP", 50),
                ("Term Plan", 20),
                ("Health Insurance", 5),
                ("Others (Traditional Plan)", 20),
            ],
            "Unit Linked Insurance Plans (ULIPs) are the dominant policy type held by respondents, accounting for 50% of the sample. Term Plans and 'Others' (specified as Traditional Plans) each represent 20%, while standard Life Insurance and Health Insurance are held by smaller proportions (5% each), highlighting the strong preference or push for ULIPs among this group.",
        ),
        pie(
            ENGAGEMENT,
            6,
            "How often does ICICI Prudential communicate with you?",
            &[
                ("Very Frequently", 50),
                ("Frequently", 20),
                ("Occasionally", 10),
                ("Rarely", 5),
                ("Never", 15),
            ],
            "A significant majority of customers report frequent contact, with 50% stating communication is 'Very Frequent' and another 20% 'Frequent'. However, there's a notable group (15%) who report 'Never' receiving communication, suggesting inconsistencies in outreach efforts or channel effectiveness.",
        ),
        Record::new(
            ENGAGEMENT,
            7,
            "Through which channels do you receive communication from ICICI Prudential? (Select all that apply)",
        )
        .with_chart(
            ChartRecipe::bar(&[
                ("SMS", 10),
                ("Email", 35),
                ("Phone Calls", 45),
                ("In-person Meetings", 5),
                ("Mobile App", 5),
            ])
            .with_respondents(100),
        )
        .with_text("Phone calls (45%) and Email (35%) emerge as the primary communication channels experienced by customers. Lower engagement is reported via SMS (10%), In-person Meetings (5%), and the Mobile App (5%), indicating a reliance on more traditional direct outreach methods. (Note: Percentages reflect the portion of 100 respondents selecting each option)."),
        pie(
            ENGAGEMENT,
            8,
            "How satisfied are you with the communication you receive from ICICI Prudential?",
            &[
                ("Very Satisfied", 20),
                ("Satisfied", 30),
                ("Neutral", 30),
                ("Dissatisfied", 10),
                ("Very Dissatisfied", 10),
            ],
            "Customer satisfaction with communication is moderate. Half the respondents are 'Satisfied' (30%) or 'Very Satisfied' (20%). However, a large segment (30%) remains 'Neutral', and a combined 20% express dissatisfaction ('Dissatisfied' 10%, 'Very Dissatisfied' 10%), pointing towards potential areas for improving communication relevance and quality.",
        ),
        pie(
            ENGAGEMENT,
            9,
            "How helpful is the customer service/support of ICICI Prudential?",
            &[
                ("Very Helpful", 10),
                ("Helpful", 45),
                ("Neutral", 20),
                ("Not Helpful", 20),
                ("Very Poor", 5),
            ],
            "A slight majority finds the customer service helpful, with 45% deeming it 'Helpful' and 10% 'Very Helpful'. Nevertheless, a significant portion remains unconvinced, including 20% 'Neutral', 20% finding it 'Not Helpful', and 5% 'Very Poor', indicating inconsistency in service experience.",
        ),
        pie(
            ENGAGEMENT,
            10,
            "Do you feel valued as a customer of ICICI Prudential?",
            &[
                ("Strongly Agree", 5),
                ("Agree", 45),
                ("Neutral", 25),
                ("Disagree", 18),
                ("Strongly Disagree", 7),
            ],
            "Perceptions of feeling valued are mixed. Half the respondents 'Agree' (45%) or 'Strongly Agree' (5%) that they feel valued. Conversely, 25% are 'Neutral', and another 25% 'Disagree' (18%) or 'Strongly Disagree' (7%), suggesting that a substantial part of the customer base does not feel particularly appreciated.",
        ),
        pie(
            LOYALTY,
            11,
            "How likely are you to renew your current policy with ICICI Prudential?",
            &[
                ("Very Likely", 18),
                ("Likely", 50),
                ("Not Sure", 10),
                ("Unlikely", 15),
                ("Very Unlikely", 7),
            ],
            "Renewal intentions appear strong, with a majority of respondents indicating they are 'Likely' (50%) or 'Very Likely' (18%) to renew their policies. While 10% are 'Not Sure', a combined 22% lean towards not renewing ('Unlikely' 15%, 'Very Unlikely' 7%), showing generally positive retention prospects but also a segment at risk of attrition.",
        ),
        pie(
            LOYALTY,
            12,
            "Would you consider switching to another insurance company in the future?",
            &[
                ("Definitely Yes", 7),
                ("Probably Yes", 15),
                ("Not Sure", 10),
                ("Probably Not", 50),
                ("Definitely Not", 18),
            ],
            "Customer retention appears relatively robust, as a significant majority state they would 'Probably Not' (50%) or 'Definitely Not' (18%) consider switching. However, 22% ('Probably Yes' 15%, 'Definitely Yes' 7%) are open to switching, indicating potential vulnerability to competitors despite overall loyalty.",
        ),
        pie(
            LOYALTY,
            13,
            "Do you recommend ICICI Prudential to friends and family?",
            &[("Frequently", 20), ("Occasionally", 20), ("Rarely", 50), ("Never", 10)],
            "Customer advocacy is weak among this group. The largest segment (50%) 'Rarely' recommends the company, and 10% 'Never' do. Only 40% recommend 'Frequently' (20%) or 'Occasionally' (20%), suggesting that while customers may stay, they are not strong promoters of the brand.",
        ),
        pie(
            LOYALTY,
            14,
            "How satisfied are you with the overall services of ICICI Prudential?",
            &[
                ("Very Satisfied", 10),
                ("Satisfied", 30),
                ("Neutral", 50),
                ("Dissatisfied", 15),
                ("Very Dissatisfied", 5),
            ],
            "Overall satisfaction is lukewarm, dominated by a large 'Neutral' group (50%). While 40% express satisfaction ('Satisfied' 30%, 'Very Satisfied' 10%), a notable 20% are dissatisfied ('Dissatisfied' 15%, 'Very Dissatisfied' 5%). This suggests a lack of strong positive experiences for many customers.",
        ),
        pie(
            LOYALTY,
            15,
            "Has your trust in ICICI Prudential increased over time?",
            &[
                ("Strongly Agree", 10),
                ("Agree", 30),
                ("Neutral", 30),
                ("Disagree", 20),
                ("Strongly Disagree", 10),
            ],
            "Views on whether trust has increased are divided. While 40% 'Agree' (30%) or 'Strongly Agree' (10%) that trust has grown, 30% are 'Neutral', and another 30% 'Disagree' (20%) or 'Strongly Disagree' (10%). This suggests inconsistent experiences in building deeper customer trust over the duration of the relationship.",
        ),
        pie(
            RETENTION,
            16,
            "What is the main reason for staying with ICICI Prudential?",
            &[
                ("Service Quality", 20),
                ("Policy Benefits", 30),
                ("Trust/Brand Name", 40),
                ("Customer Support", 10),
            ],
            "The primary retention driver cited is 'Trust/Brand Name' (40%), followed closely by 'Policy Benefits' (30%). 'Service Quality' (20%) and 'Customer Support' (10%) are mentioned less frequently, indicating that the company's reputation and product offerings are more influential in retaining these customers than the service experience itself.",
        ),
        pie(
            RETENTION,
            17,
            "How likely are you to purchase additional policies from ICICI Prudential?",
            &[
                ("Very Likely", 20),
                ("Likely", 35),
                ("Not Sure", 20),
                ("Unlikely", 18),
                ("Very Unlikely", 7),
            ],
            "There is moderate potential for cross-selling or up-selling, with 55% of respondents indicating they are 'Likely' (35%) or 'Very Likely' (20%) to purchase additional policies. However, 20% are 'Not Sure', and a quarter ('Unlikely' 18%, 'Very Unlikely' 7%) show reluctance towards further purchases.",
        ),
        pie(
            RETENTION,
            18,
            "Do you feel the company understands your financial goals?",
            &[
                ("Strongly Agree", 20),
                ("Agree", 30),
                ("Neutral", 20),
                ("Disagree", 20),
                ("Strongly Disagree", 10),
            ],
            "Perception is split regarding whether ICICI Prudential understands customer financial goals. Exactly half 'Agree' (30%) or 'Strongly Agree' (20%). The remaining half is divided between 'Neutral' (20%) and those who 'Disagree' (20%) or 'Strongly Disagree' (10%), highlighting a gap in personalized understanding for many clients.",
        ),
        pie(
            RETENTION,
            19,
            "Has your experience improved with ICICI Prudential over the years?",
            &[
                ("Yes, significantly", 50),
                ("Yes, somewhat", 20),
                ("No change", 20),
                ("No, it has worsened", 10),
            ],
            "A strong majority (70%) perceive an improvement in their experience, reporting it has improved 'significantly' (50%) or 'somewhat' (20%). While 20% noted 'No change', only 10% felt the experience has 'worsened', suggesting positive evolution in customer interactions over time for most respondents.",
        ),
        Record::new(
            OPEN_ENDED,
            20,
            "In your opinion, what should ICICI Prudential improve to enhance your loyalty? (Open-ended response)",
        )
        .with_text("The qualitative feedback suggests customers desire improvements in personalized service and transparency. Key recommendations include better understanding of individual needs for tailored plan suggestions, clearer explanations of policy terms, hidden clauses, and charges by agents/staff, and reducing the frequency of potentially intrusive sales calls."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RenderRecipe;

    #[test]
    fn test_sequences_run_one_to_twenty() {
        let sequences: Vec<u32> = records().iter().map(|r| r.key.sequence).collect();
        assert_eq!(sequences, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_only_channel_question_is_bar() {
        let bars: Vec<u32> = records()
            .iter()
            .filter(|r| matches!(&r.recipe, Some(RenderRecipe::Chart(c)) if c.kind == "bar"))
            .map(|r| r.key.sequence)
            .collect();
        assert_eq!(bars, vec![7]);
    }

    #[test]
    fn test_open_ended_question_has_no_chart() {
        let records = records();
        let last = records.last().unwrap();
        assert!(last.recipe.is_none());
        assert_eq!(last.body.len(), 1);
    }
}
