//! Text-only exam solutions for an entrepreneurship paper
//!
//! No question draws anything; each answer is a run of typed body blocks
//! (sub-headings, bold points, memory tricks, diagram suggestions and a
//! list of points to expand on).

use crate::core::{BodyBlock, Record};

const JUNE_2023: &str = "June 2023";

/// Title paragraph opening the document
pub const TITLE: &str = "MMPC-018: ENTREPRENEURSHIP - Exam Solutions (June 2023)";

fn answer(sequence: u32, prompt: &str, blocks: Vec<BodyBlock>) -> Record {
    blocks
        .into_iter()
        .fold(Record::new(JUNE_2023, sequence, prompt), Record::with_block)
}

fn heading(text: &str) -> BodyBlock {
    BodyBlock::Heading(text.to_string())
}

fn text(text: &str) -> BodyBlock {
    BodyBlock::Text(text.to_string())
}

fn point(text: &str) -> BodyBlock {
    BodyBlock::Point(text.to_string())
}

fn sub_point(text: &str) -> BodyBlock {
    BodyBlock::SubPoint(text.to_string())
}

fn bullet(text: &str) -> BodyBlock {
    BodyBlock::Bullet(text.to_string())
}

fn trick(text: &str) -> BodyBlock {
    BodyBlock::Trick(text.to_string())
}

fn suggestion(text: &str) -> BodyBlock {
    BodyBlock::Suggestion(text.to_string())
}

fn expand(text: &str) -> BodyBlock {
    BodyBlock::Expand(text.to_string())
}

pub fn records() -> Vec<Record> {
    vec![
        evolution(),
        competence(),
        group_entrepreneurship(),
        msme(),
        finance(),
        location(),
        social_entrepreneurship(),
        ethics(),
    ]
}

fn evolution() -> Record {
    answer(
        1,
        "Briefly trace the evolution of entrepreneurship from various schools of thoughts.",
        vec![
            heading("Introduction:"),
            text("Entrepreneurship, the dynamic process of creating and managing a new venture, has evolved significantly in its conceptual understanding. Various schools of thought have contributed to shaping our perception of who an entrepreneur is and what entrepreneurship entails. Tracing this evolution helps in appreciating the multifaceted nature of this field."),
            heading("Evolution of Entrepreneurship - Schools of Thought:"),
            text("The understanding of entrepreneurship has progressed through several dominant perspectives:"),
            heading("1. The Economic School of Thought:"),
            text("This is one of the earliest perspectives, focusing on the economic functions and contributions of the entrepreneur."),
            point("\u{2022} Richard Cantillon (Early 18th Century): Often credited as one of the first to deeply analyze the entrepreneur. He viewed entrepreneurs as risk-takers who buy at certain prices and sell at uncertain prices, thereby bearing non-insurable risk. Jargon: 'Risk-bearer' \u{2013} someone who accepts the possibility of loss in pursuit of profit."),
            point("\u{2022} Jean-Baptiste Say (Early 19th Century): Expanded on Cantillon's ideas. Say emphasized the entrepreneur's role as a coordinator of the factors of production (land, labor, capital). He shifted the focus from mere risk-bearing to the active management and combination of resources to create value."),
            point("\u{2022} Joseph Schumpeter (Early to Mid-20th Century): Perhaps the most influential economist in entrepreneurship theory. Schumpeter defined the entrepreneur as an innovator who drives 'creative destruction.' This involves introducing new products, new methods of production, new markets, new sources of supply, or new organizational structures. For Schumpeter, the entrepreneur was the engine of economic development, disrupting equilibrium to create new opportunities. Jargon: 'Creative Destruction' \u{2013} the process of industrial mutation that incessantly revolutionizes the economic structure from within, destroying the old one, incessantly creating a new one."),
            point("\u{2022} Frank Knight (Early 20th Century): Differentiated between risk (measurable uncertainty) and true uncertainty (unmeasurable). Knight argued that entrepreneurs earn profits for dealing with true uncertainty, which cannot be insured against."),
            point("\u{2022} Israel Kirzner (Late 20th Century): Presented the entrepreneur as an 'alert' individual who discovers and exploits opportunities for profit that others have not noticed. This perspective focuses on market equilibrium and the entrepreneur's role in moving markets towards it by identifying and correcting inefficiencies."),
            heading("2. The Psychological School of Thought:"),
            text("This school focuses on the personality traits, characteristics, and motivations of entrepreneurs."),
            point("\u{2022} David McClelland (Mid-20th Century): Proposed that entrepreneurs are driven by a high 'Need for Achievement' (nAch). This includes a desire for personal responsibility, moderate risk-taking, and a need for feedback on performance."),
            point("\u{2022} Julian Rotter (Mid-20th Century): Introduced the concept of 'Locus of Control.' Entrepreneurs are often found to have a strong internal locus of control, believing they can influence events and their outcomes, rather than being at the mercy of external forces (external locus of control)."),
            point("\u{2022} Other Traits: Research in this area has also explored traits like risk propensity, tolerance for ambiguity, innovativeness, proactiveness, and self-efficacy."),
            heading("3. The Sociological/Cultural School of Thought:"),
            text("This perspective examines how societal and cultural factors influence the emergence and behavior of entrepreneurs."),
            point("\u{2022} Max Weber (Early 20th Century): In 'The Protestant Ethic and the Spirit of Capitalism,' Weber suggested that certain religious beliefs (e.g., Calvinism) fostered values like hard work, thrift, and rationality, which were conducive to capitalist development and entrepreneurship."),
            point("\u{2022} Everett Hagen (Mid-20th Century): Argued that entrepreneurship often arises from groups experiencing 'withdrawal of status respect' or social marginalization, leading them to seek alternative paths to success and recognition."),
            point("\u{2022} Thomas Cochran (Mid-20th Century): Emphasized the role of cultural values, role expectations, and social sanctions in shaping entrepreneurial behavior. He suggested that entrepreneurship is more likely in societies that value and support it."),
            point("\u{2022} Network Theory: Modern sociological approaches also highlight the importance of social networks, relationships, and embeddedness in accessing resources, information, and support for entrepreneurial ventures."),
            heading("4. The Management/Behavioral School of Thought:"),
            text("This school views entrepreneurship as a set of learnable skills and behaviors related to opportunity identification, resource acquisition, and venture management."),
            point("\u{2022} Peter Drucker (Late 20th Century): A prominent management theorist, Drucker viewed entrepreneurship as a discipline that can be learned and practiced. He emphasized 'purposeful innovation' as the core of entrepreneurship and identified sources of innovative opportunity. He stressed that entrepreneurship is not about personality but about behavior."),
            point("\u{2022} Focus on Process: This school often breaks down entrepreneurship into a series of stages or activities, such as opportunity recognition, business planning, resource mobilization, launching, and managing growth. It looks at what entrepreneurs *do* rather than who they *are*."),
            heading("Conclusion:"),
            text("The evolution of entrepreneurship thought reflects a growing understanding of its complexity. No single school provides a complete picture. Modern perspectives tend to be integrative, recognizing that entrepreneurship is influenced by economic conditions, individual psychological traits, socio-cultural contexts, and manageable behaviors. This holistic view is crucial for fostering entrepreneurship effectively in diverse settings."),
            trick("Memory Trick: 'Every Person Should Manage' (Economic, Psychological, Sociological, Management) to remember the main schools of thought."),
            suggestion("Diagram Suggestion: A timeline showing key thinkers under each school of thought and their approximate period of influence."),
            expand("Key Points to Expand Further:"),
            bullet("Discuss the limitations of each school of thought (e.g., trait approach being too deterministic, economic models being too abstract)."),
            bullet("Explore the concept of 'Intrapreneurship' as a modern extension, particularly from the management school."),
            bullet("Link the evolution to changing global economic landscapes (e.g., rise of tech entrepreneurship)."),
        ],
    )
}

fn competence() -> Record {
    answer(
        2,
        "What is Competence? Explain various types of Entrepreneurial Competencies.",
        vec![
            heading("Definition of Competence:"),
            text("Competence, in a general sense, refers to the ability of an individual to perform a specific task or role successfully and efficiently. It is a cluster of related knowledge, skills, abilities, and attitudes (KSAs) that are observable, measurable, and critical to successful performance. Competence is not just about knowing *what* to do, but also knowing *how* to do it effectively and consistently in various situations."),
            text("In the context of entrepreneurship, competence means possessing and applying the necessary KSAs to identify opportunities, launch, manage, and grow a new venture despite uncertainties and challenges."),
            heading("Types of Entrepreneurial Competencies:"),
            text("Entrepreneurial competencies are specific sets of skills, knowledge, and attributes that enable entrepreneurs to perform their roles effectively. While various frameworks exist, some commonly recognized types include:"),
            point("1. Opportunity Competencies:"),
            text("These relate to the entrepreneur's ability to perceive, create, evaluate, and exploit new business opportunities."),
            point("\u{2022}   Opportunity Recognition: Identifying unmet needs, market gaps, or new applications for existing technologies."),
            point("\u{2022}   Opportunity Assessment: Evaluating the feasibility, viability, and potential risks/rewards of an identified opportunity."),
            point("\u{2022}   Creativity and Innovation: Developing novel solutions, products, services, or business models."),
            point("2. Relationship Competencies (Social Competencies):"),
            text("These involve the skills needed to build and maintain positive and productive relationships with various stakeholders."),
            point("\u{2022}   Networking: Building and leveraging a diverse network of contacts for information, resources, and support."),
            point("\u{2022}   Leadership and Motivation: Inspiring and guiding a team, delegating effectively, and fostering a positive work environment."),
            point("\u{2022}   Communication Skills: Articulating ideas clearly (written and verbal), active listening, and persuasive communication."),
            point("\u{2022}   Negotiation and Conflict Resolution: Achieving mutually beneficial agreements and managing disagreements constructively."),
            point("3. Conceptual Competencies (Cognitive Competencies):"),
            text("These relate to the entrepreneur's mental abilities to understand complex situations, solve problems, and make effective decisions."),
            point("\u{2022}   Problem-Solving: Identifying the root causes of problems and developing effective solutions."),
            point("\u{2022}   Decision-Making: Making timely and informed choices, often under conditions of uncertainty."),
            point("\u{2022}   Analytical and Critical Thinking: Evaluating information objectively and logically."),
            point("\u{2022}   Learning Orientation: A willingness to learn from experiences (both successes and failures) and adapt."),
            point("4. Organizing and Management Competencies:"),
            text("These involve the skills required to plan, organize, and manage resources effectively to achieve business objectives."),
            point("\u{2022}   Planning and Goal Setting: Defining clear objectives and developing strategies and action plans to achieve them (e.g., business planning)."),
            point("\u{2022}   Resource Mobilization and Management: Acquiring and efficiently utilizing financial, human, and physical resources."),
            point("\u{2022}   Financial Management: Understanding financial statements, budgeting, managing cash flow, and making investment decisions."),
            point("\u{2022}   Operational Management: Managing day-to-day operations, ensuring quality, and optimizing processes."),
            point("5. Strategic Competencies:"),
            text("These relate to the entrepreneur's ability to think long-term, define a vision, and position the venture for sustained competitive advantage."),
            point("\u{2022}   Visioning: Creating a compelling and clear vision for the future of the venture."),
            point("\u{2022}   Strategic Thinking and Formulation: Analyzing the competitive landscape, identifying strategic options, and formulating effective strategies."),
            point("\u{2022}   Adaptability and Flexibility: Responding effectively to changes in the market or business environment."),
            point("6. Commitment Competencies (Personal/Self-Management Competencies):"),
            text("These are personal attributes that drive the entrepreneur's actions and perseverance."),
            point("\u{2022}   Perseverance and Resilience: Persisting in the face of obstacles, setbacks, and failures."),
            point("\u{2022}   Initiative and Proactiveness: Taking action without being told and anticipating future needs or problems."),
            point("\u{2022}   Self-Confidence and Self-Efficacy: Believing in one's own abilities to succeed."),
            point("\u{2022}   Risk Propensity (Calculated): Willingness to take calculated risks after assessing potential outcomes."),
            point("\u{2022}   Passion and Dedication: Deep commitment to the venture and its goals."),
            heading("Conclusion:"),
            text("Entrepreneurial competencies are not innate; many can be learned and developed over time through education, experience, and mentorship. A successful entrepreneur typically possesses a blend of these competencies, and the relative importance of each may vary depending on the stage of the venture, the industry, and the specific context. Recognizing and cultivating these competencies is crucial for aspiring and existing entrepreneurs."),
            trick("Memory Trick: 'ORC-OSC' for the competencies: Opportunity, Relationship, Conceptual, Organizing, Strategic, Commitment. (Imagine an ORC who is good at OSCillating between strategies and commitments!)"),
            suggestion("Diagram Suggestion: A circular or hub-and-spoke diagram with 'Entrepreneurial Success' at the center and the different competency categories radiating outwards, with specific skills listed under each."),
            expand("Key Points to Expand Further:"),
            bullet("Discuss how these competencies can be assessed or measured."),
            bullet("Provide examples of famous entrepreneurs and the specific competencies they demonstrated."),
            bullet("Explain how entrepreneurial education and training programs aim to develop these competencies."),
        ],
    )
}

fn group_entrepreneurship() -> Record {
    answer(
        3,
        "What is a Group Entrepreneurship? Explain various types of Group Entrepreneurship.",
        vec![
            heading("Definition of Group Entrepreneurship:"),
            text("Group Entrepreneurship, also known as team entrepreneurship or collective entrepreneurship, refers to entrepreneurial activities undertaken by two or more individuals who collectively pool their resources, skills, knowledge, and efforts to identify an opportunity, create, launch, and manage a new venture. Unlike solo entrepreneurship where a single individual drives the venture, group entrepreneurship emphasizes collaboration, shared decision-making, and distributed responsibilities among the founding members."),
            text("The core idea is that a team can often bring a wider range of competencies, greater financial capital, and more robust problem-solving capabilities than a single entrepreneur. It also allows for shared risk and workload."),
            heading("Various Types of Group Entrepreneurship:"),
            text("Group entrepreneurship can manifest in several forms, each with its own characteristics, legal structures, and operational dynamics:"),
            point("1. Founding Teams / Co-founderships:"),
            text("This is the most common image of group entrepreneurship, where a small group of individuals (co-founders) come together with a shared vision to start a new company. They typically share equity and play active roles in the business. The success of such ventures often depends on the complementarity of skills, shared values, and effective communication among co-founders."),
            point("Example: Steve Jobs, Steve Wozniak, and Ronald Wayne co-founding Apple."),
            point("2. Family Businesses:"),
            text("These are enterprises where ownership and/or management are controlled by members of the same family. Entrepreneurship within families can span generations. While they offer unique strengths like trust and long-term commitment, they can also face challenges related to succession planning, nepotism, and work-life balance."),
            point("Example: The Ford Motor Company, Reliance Industries (India)."),
            point("3. Partnerships:"),
            text("A formal legal structure where two or more individuals (partners) agree to share in the profits or losses of a business. A partnership agreement outlines the responsibilities, contributions, and profit/loss sharing ratios."),
            point("\u{2022}   General Partnership: All partners share in the business's operational management and liability."),
            point("\u{2022}   Limited Partnership: Includes general partners (who manage and have unlimited liability) and limited partners (who invest capital but have limited liability and no management role)."),
            point("Example: Many law firms and accounting firms are structured as partnerships."),
            point("4. Cooperatives:"),
            text("A cooperative is an autonomous association of persons united voluntarily to meet their common economic, social, and cultural needs and aspirations through a jointly-owned and democratically-controlled enterprise. Members are both owners and users."),
            point("Types include consumer cooperatives, producer cooperatives (e.g., agricultural co-ops like Amul), worker cooperatives, and housing cooperatives."),
            point("Example: Amul (Anand Milk Union Limited) in India, Mondragon Corporation in Spain (a federation of worker cooperatives)."),
            point("5. Joint Ventures (JVs):"),
            text("A business arrangement where two or more independent companies agree to pool their resources to accomplish a specific task or project. This new entity is distinct from the parent companies. JVs are often formed to enter new markets, share R&D costs, or combine complementary technologies."),
            point("Example: Sony Ericsson (a JV between Sony and Ericsson for mobile phones, now defunct). Maruti Suzuki (initially a JV between Maruti Udyog Ltd of India and Suzuki of Japan)."),
            point("6. Corporate Venturing / Intrapreneurship (Group-led):"),
            text("While intrapreneurship can be individual, it often involves teams within an existing corporation acting entrepreneurially to develop new products, services, or business units. The corporation provides resources and a supportive environment. This is a form of internal group entrepreneurship."),
            point("Example: Google's '20% time' policy leading to Gmail, developed by a small team."),
            point("7. Franchising (from a multi-unit franchisee perspective):"),
            text("While a single franchise unit might be run by an individual, a group of individuals might form a company to acquire and manage multiple franchise units. This collective entity acts entrepreneurially within the franchisor's framework."),
            point("Example: A group forming a company to operate several McDonald's outlets."),
            heading("Conclusion:"),
            text("Group entrepreneurship offers significant advantages such as diverse skill sets, increased capital, shared risk, and enhanced decision-making. However, it also presents challenges like potential conflicts, slower decision-making if consensus is always required, and complexities in equity distribution. The success of group entrepreneurship heavily relies on clear roles, shared vision, trust, effective communication, and robust governance mechanisms. The choice of structure depends on the venture's goals, the relationship between members, and legal/tax considerations."),
            trick("Memory Trick: 'Founding Families Partner Cooperatively in Joint Corporate Franchises.' (Founding Teams, Family Businesses, Partnerships, Cooperatives, Joint Ventures, Corporate Venturing, Franchises)."),
            suggestion("Diagram Suggestion: A mind map branching out from 'Group Entrepreneurship' to its various types, with brief characteristics for each type."),
            expand("Key Points to Expand Further:"),
            bullet("Discuss the pros and cons of group entrepreneurship compared to solo entrepreneurship in more detail."),
            bullet("Elaborate on the critical success factors for founding teams (e.g., team composition, conflict resolution mechanisms)."),
            bullet("Explore the legal implications and differences in liability for different types of group structures."),
        ],
    )
}

fn msme() -> Record {
    answer(
        4,
        "Explain the concept behind formation of Micro, Small and Medium Enterprises (MSMEs). Describe its characteristics and relevance.",
        vec![
            heading("Concept Behind Formation of MSMEs:"),
            text("The concept behind the formation and promotion of Micro, Small, and Medium Enterprises (MSMEs) stems from their widely recognized potential to drive socio-economic development. Governments and policymakers worldwide support MSMEs due to their unique contributions that larger corporations often cannot replicate with the same efficiency or societal impact. The core ideas are:"),
            point("\u{2022} Employment Generation: MSMEs are typically more labor-intensive than large corporations, making them crucial for creating jobs, especially in developing economies and rural areas. Jargon: 'Labor-intensive' \u{2013} requiring a large amount of labor relative to capital."),
            point("\u{2022} Equitable Distribution of Income and Wealth: By fostering entrepreneurship at grassroots levels, MSMEs help in dispersing economic power and reducing income disparities, preventing wealth concentration in a few hands."),
            point("\u{2022} Mobilization of Local Resources: MSMEs often utilize local capital, skills, and raw materials, which might otherwise remain untapped, leading to value addition within the community."),
            point("\u{2022} Promotion of Innovation and Entrepreneurship: They serve as a breeding ground for new ideas, innovations, and entrepreneurial talent. Many large corporations started as small enterprises."),
            point("\u{2022} Balanced Regional Development: MSMEs can be established in smaller towns and rural areas, helping to curb rural-urban migration and promote industrialization beyond major urban centers."),
            point("\u{2022} Flexibility and Adaptability: Smaller enterprises can often adapt more quickly to changing market conditions and customer needs compared to larger, more bureaucratic organizations."),
            point("\u{2022} Contribution to Exports and GDP: Collectively, MSMEs make significant contributions to a nation's Gross Domestic Product (GDP) and export earnings."),
            point("\u{2022} Support to Large Industries (Ancillarization): MSMEs often act as ancillary units, supplying components, sub-assemblies, and services to large-scale industries, thus forming an integral part of the industrial ecosystem."),
            text("The definition of MSMEs usually varies by country and is typically based on criteria such as investment in plant and machinery/equipment, annual turnover, or number of employees. For example, in India, the MSMED Act, 2006 (and subsequent amendments) defines them based on investment and turnover criteria."),
            heading("Characteristics of MSMEs:"),
            text("MSMEs exhibit several common characteristics:"),
            point("\u{2022} Low Capital Requirement: Generally, they require less capital to start and operate compared to large enterprises."),
            point("\u{2022} Localized Operations: Many MSMEs cater to local or regional markets, though some also export."),
            point("\u{2022} Owner-Managed: Often, the owner is also the manager, leading to quick decision-making but also potential limitations in professional management expertise."),
            point("\u{2022} High Labor Intensity: They tend to use more labor per unit of output compared to capital."),
            point("\u{2022} Flexibility: Capable of adapting their production and operations to meet specific customer orders or changing market demands relatively quickly."),
            point("\u{2022} Use of Indigenous Technology: Many MSMEs rely on locally developed or adapted technologies."),
            point("\u{2022} Closer Customer Relationships: Due to their scale and often localized nature, they can maintain more personal relationships with customers."),
            point("\u{2022} Informal Sector Linkages: Many MSMEs, especially micro and some small enterprises, operate in or have strong links with the informal sector."),
            point("\u{2022} Vulnerability: They can be more vulnerable to economic downturns, competition from larger players, and changes in government policies."),
            heading("Relevance of MSMEs:"),
            text("The relevance of MSMEs to an economy, particularly for developing countries like India, is immense:"),
            point("\u{2022} Engine of Economic Growth: They contribute significantly to GDP, industrial output, and value addition."),
            point("\u{2022} Major Employment Provider: After agriculture, the MSME sector is often the largest employer, absorbing a vast workforce, including skilled, semi-skilled, and unskilled labor."),
            point("\u{2022} Fostering Inclusive Growth: By providing opportunities to a wide cross-section of society, including women, minorities, and people in disadvantaged regions, MSMEs promote inclusive development."),
            point("\u{2022} Innovation Hubs: They are often sources of grassroots innovation and can be pioneers in niche markets."),
            point("\u{2022} Export Promotion: MSMEs contribute substantially to export earnings, often specializing in products like handicrafts, textiles, and light engineering goods."),
            point("\u{2022} Development of Entrepreneurial Spirit: They nurture a culture of entrepreneurship and self-reliance."),
            point("\u{2022} Strengthening Industrial Base: Through ancillarization and by creating a competitive environment, they strengthen the overall industrial structure of a country."),
            point("\u{2022} Poverty Alleviation: By creating livelihoods, MSMEs play a vital role in reducing poverty."),
            heading("Conclusion:"),
            text("MSMEs are the backbone of most economies worldwide. Their formation is driven by the need for widespread economic participation, job creation, and balanced development. Despite facing challenges like access to finance, technology, and markets, their characteristics make them uniquely positioned to contribute to economic dynamism and social equity. Recognizing their relevance, governments implement various policies and support programs to nurture their growth and sustainability."),
            trick("Memory Trick (Relevance): 'Jobs In Every Region Develop Nations' (Job creation, Inclusive growth, Export, Regional development, GDP contribution, Nurturing entrepreneurship)."),
            suggestion("Diagram Suggestion: A pyramid with MSMEs forming the broad base, supporting larger industries and the overall economy at the top. Or, a circular flow diagram showing MSMEs' contributions to households (jobs, income) and other businesses (supplies)."),
            expand("Key Points to Expand Further:"),
            bullet("Provide specific data/statistics on MSME contribution to GDP and employment in a particular country (e.g., India)."),
            bullet("Discuss common challenges faced by MSMEs (finance, technology, marketing, infrastructure, skilled labor)."),
            bullet("Outline some government policies or schemes aimed at supporting MSMEs."),
        ],
    )
}

fn finance() -> Record {
    answer(
        5,
        "What are the sources of finance in business enterprise? Discuss.",
        vec![
            heading("Introduction:"),
            text("Finance is the lifeblood of any business enterprise, essential for its establishment, operations, growth, and expansion. Access to adequate and timely finance is a critical determinant of entrepreneurial success. Business finance can be broadly categorized based on the period (short, medium, long-term), ownership (equity, debt), and source (internal, external)."),
            text("Jargon: 'Equity finance' \u{2013} funds raised by selling ownership stakes in the company. 'Debt finance' \u{2013} funds borrowed that must be repaid with interest."),
            heading("Sources of Finance in Business Enterprise:"),
            text("The various sources of finance available to a business enterprise can be discussed as follows:"),
            point("A. Internal Sources (Generated within the business):"),
            point("1. Personal Savings / Owner's Capital (Bootstrapping): Especially for startups and small businesses, the entrepreneur's own savings are often the primary initial source. This is also known as bootstrapping \u{2013} funding the venture with personal finances or operating revenues."),
            point("2. Retained Earnings (Ploughing back of profits): Profitable existing businesses can reinvest a portion of their net profits back into the company for growth and expansion, rather than distributing it all as dividends. This is a very important source of long-term finance for established companies."),
            point("3. Sale of Assets: A business might sell off surplus or underutilized assets (e.g., old machinery, unused land) to generate funds."),
            point("B. External Sources (Raised from outside the business):"),
            heading("I. Equity Finance (Ownership Capital):"),
            point("4. Friends and Family: Entrepreneurs often turn to close relations for initial capital, usually in exchange for equity or as an informal loan. While accessible, it can strain personal relationships if the venture fails."),
            point("5. Angel Investors: Wealthy individuals who provide capital for business start-ups, usually in exchange for convertible debt or ownership equity. They often bring industry expertise and networks."),
            point("6. Venture Capital (VC) Firms: Professional firms that invest in early-stage, high-potential, and often high-risk, growth companies. VCs invest in exchange for equity and typically seek a significant return on investment, often through an exit strategy like an IPO or acquisition. They usually take an active role in guiding the company."),
            point("7. Private Equity (PE) Firms: Similar to VCs but usually invest in more mature companies, often for buyouts, restructuring, or expansion. They also take equity stakes."),
            point("8. Initial Public Offering (IPO) / Stock Market: A company can raise substantial capital by selling shares to the public for the first time and getting listed on a stock exchange. This is typically for well-established, larger companies seeking significant expansion capital."),
            point("9. Crowdfunding (Equity-based): Raising small amounts of money from a large number of people, typically via the internet, in exchange for equity in the company."),
            heading("II. Debt Finance (Borrowed Capital):"),
            point("10. Bank Loans (Term Loans and Working Capital Loans): Commercial banks provide various types of loans. Term loans are for long-term investments (e.g., machinery, buildings), while working capital loans (e.g., overdrafts, cash credit) finance day-to-day operations. Collateral is often required."),
            point("11. Non-Banking Financial Companies (NBFCs): These institutions also provide loans and financial services, sometimes with more flexible terms than banks but potentially higher interest rates."),
            point("12. Debentures / Bonds: Companies can issue debentures (unsecured) or bonds (often secured) to the public or institutions, which are debt instruments with a fixed interest rate and maturity date."),
            point("13. Trade Credit: Suppliers may allow businesses to purchase goods or services on credit, effectively providing short-term finance. This is a common source for managing working capital."),
            point("14. Leasing and Hire Purchase:"),
            sub_point("Leasing: Acquiring the use of an asset (e.g., equipment, vehicles) by paying regular lease rentals for a specified period, without owning it. This avoids large upfront capital expenditure."),
            sub_point("Hire Purchase: Acquiring an asset by paying installments over a period. Ownership transfers to the hirer after the last installment is paid."),
            point("15. Government Schemes and Subsidies: Many governments offer financial assistance, grants, or subsidized loans to promote specific sectors (e.g., MSMEs, startups, green technology)."),
            point("16. Crowdfunding (Debt-based / Peer-to-Peer Lending): Raising loans from multiple individuals online, with an agreement to repay with interest."),
            point("17. Factoring and Forfaiting:"),
            sub_point("Factoring: Selling accounts receivable (invoices) to a third party (a factor) at a discount to get immediate cash."),
            sub_point("Forfaiting: Similar to factoring but usually for international trade receivables, longer-term, and without recourse to the exporter."),
            heading("Discussion and Considerations:"),
            text("Choosing the right source of finance depends on various factors:"),
            point("\u{2022} Purpose and Period: Long-term assets are best financed by long-term sources; working capital by short-term sources."),
            point("\u{2022} Cost: Interest rates for debt, dilution of ownership for equity."),
            point("\u{2022} Risk: Debt increases financial risk due to fixed repayment obligations. Equity is less risky for the firm but dilutes control."),
            point("\u{2022} Control: Equity financing can dilute the original owners' control, while debt financing generally does not (unless covenants are breached)."),
            point("\u{2022} Flexibility: Some sources come with restrictive covenants or conditions."),
            point("\u{2022} Availability and Eligibility: Not all sources are available to all types or sizes of businesses (e.g., IPOs are for larger companies)."),
            text("A balanced capital structure, often a mix of debt and equity, is usually optimal."),
            heading("Conclusion:"),
            text("A wide array of financing sources is available to business enterprises, each with its own merits, demerits, and suitability. Entrepreneurs must carefully evaluate their financial needs, the stage of their business, and the characteristics of each source to make informed financing decisions that support the venture's viability and growth."),
            trick("Memory Trick: Think of finance sources like layers of an 'Onion': 'Owner's Core', then 'Friends/Family Ring', then 'Angel/VC Layer', then 'Bank/Market Skin'. (This helps visualize progression but isn't exhaustive). Or, 'DEBT' vs 'EQUITY' as main branches."),
            suggestion("Diagram Suggestion: A tree diagram categorizing sources into Internal/External, and then further into Equity/Debt and Short/Long-term."),
            expand("Key Points to Expand Further:"),
            bullet("Discuss the concept of 'capital structure' and its importance."),
            bullet("Elaborate on the challenges faced by startups in accessing finance."),
            bullet("Compare and contrast debt financing vs. equity financing in more detail, including tax implications."),
        ],
    )
}

fn location() -> Record {
    answer(
        6,
        "What are the factors which determine the location decisions of an enterprise? Discuss.",
        vec![
            heading("Introduction:"),
            text("The location decision for an enterprise is a critical strategic choice that can significantly impact its operational efficiency, cost structure, market access, and long-term profitability. It's a long-term commitment and often involves substantial investment, making it difficult and costly to reverse. Therefore, businesses undertake careful analysis of various factors before selecting an optimal location."),
            text("Jargon: 'Optimal location' \u{2013} a site that minimizes costs and maximizes benefits for the enterprise."),
            heading("Factors Determining Location Decisions:"),
            text("The factors influencing location decisions can be broadly categorized, though they often interrelate:"),
            point("1. Proximity to Market:"),
            point("\u{2022}   For businesses producing perishable goods, or those where transportation costs of finished products are high (e.g., bulky items), or where quick customer service is crucial (e.g., retail, services), being close to the target market is vital."),
            point("\u{2022}   Reduces distribution costs and delivery times, enhances customer responsiveness."),
            point("2. Availability and Proximity of Raw Materials:"),
            point("\u{2022}   Industries that process bulky or perishable raw materials, or where raw material transportation costs are high, often locate near the source of these materials (e.g., sugar mills near sugarcane fields, paper mills near forests)."),
            point("\u{2022}   Ensures a steady and cost-effective supply of inputs."),
            point("3. Availability of Labor:"),
            point("\u{2022}   Access to a pool of skilled, semi-skilled, or unskilled labor at reasonable wage rates is crucial. The specific labor requirements depend on the nature of the industry."),
            point("\u{2022}   Labor productivity, industrial relations climate (e.g., unionization levels, history of strikes), and availability of specialized skills are key considerations."),
            point("4. Infrastructure Facilities:"),
            point("\u{2022}   Transportation: Availability of roads, railways, ports, and airports for movement of raw materials and finished goods."),
            point("\u{2022}   Power: Reliable and adequate supply of electricity at competitive rates."),
            point("\u{2022}   Water: Sufficient supply of water, especially for process industries."),
            point("\u{2022}   Communication: Good telecommunication and internet connectivity."),
            point("\u{2022}   Waste Disposal: Facilities for safe and compliant disposal of industrial waste."),
            point("5. Government Policies and Regulations:"),
            point("\u{2022}   Government incentives such as tax holidays, subsidies, grants, and development of Special Economic Zones (SEZs) or industrial parks can attract businesses."),
            point("\u{2022}   Conversely, stringent regulations, high taxes, or political instability can deter investment."),
            point("\u{2022}   Local zoning laws, environmental regulations, and licensing procedures also play a role."),
            point("6. Cost of Land and Construction:"),
            point("\u{2022}   The price of land, availability of suitable sites, and the cost of constructing facilities vary significantly between locations. This is a major upfront investment."),
            point("7. Industrial Climate and Agglomeration Economies:"),
            point("\u{2022}   Agglomeration Economies: Benefits that firms obtain by locating near each other ('clustering'). This can include access to a specialized labor pool, supplier networks, shared infrastructure, and knowledge spillovers (e.g., Silicon Valley for tech, Detroit for auto historically)."),
            point("\u{2022}   Presence of supporting industries (ancillary units, repair services) and a favorable business environment."),
            point("8. Environmental Factors and Regulations:"),
            point("\u{2022}   Climatic conditions suitable for the industry or employees."),
            point("\u{2022}   Increasingly important are environmental impact assessments and regulations related to pollution control and sustainability. Some locations may be off-limits for certain types of industries."),
            point("9. Access to Finance and Support Services:"),
            point("\u{2022}   Availability of banks, financial institutions, and other support services like legal, accounting, and consulting firms."),
            point("10. Personal Factors (especially for Small Businesses):"),
            point("\u{2022}   For small entrepreneurs, personal preferences, family ties, or proximity to home can significantly influence the location choice, sometimes overriding purely economic factors."),
            point("11. Political Stability and Security:"),
            point("\u{2022}   A stable political environment, rule of law, and security of assets and personnel are fundamental for long-term business operations."),
            point("12. Global and International Factors (for MNCs):"),
            point("\u{2022}   For multinational corporations, factors like exchange rates, trade barriers, host country regulations, cultural differences, and access to international markets become critical."),
            heading("Discussion:"),
            text("The relative importance of these factors varies depending on the type of industry (manufacturing, service, retail), scale of operations, and specific business strategy. For instance, a software development company might prioritize skilled labor and communication infrastructure, while a heavy manufacturing plant might focus on raw materials, power, and transport. Businesses often use quantitative methods (e.g., factor rating, break-even analysis) and qualitative judgment to evaluate potential locations."),
            text("The decision is often a trade-off. No single location may be perfect on all counts, so the enterprise must weigh the factors according to its priorities to find the most advantageous or 'optimal' location."),
            heading("Conclusion:"),
            text("Selecting the right location is a complex, multi-faceted decision that requires thorough research and careful consideration of numerous inter-dependent factors. A well-chosen location can provide a competitive edge and contribute to the success and sustainability of the enterprise, while a poor choice can lead to operational inefficiencies and financial strain."),
            trick("Memory Trick: 'Market & Materials Labor Infrastructure, Government Costs Industry, Environment & Personal Politics' (MMLI GC IEPP - a bit clunky, but covers key areas). Or, think of building a house: 'Location, Location, Location' and what makes a good one (access, resources, community, safety)."),
            suggestion("Diagram Suggestion: A mind map with 'Location Decision' at the center, branching out to these key factors. Each branch can have sub-points or examples."),
            expand("Key Points to Expand Further:"),
            bullet("Discuss specific location models or techniques used in decision-making (e.g., Center of Gravity method, Factor Rating method)."),
            bullet("Provide examples of companies that made successful or unsuccessful location decisions and the reasons why."),
            bullet("Discuss the impact of globalization and technology (e.g., remote work) on location decisions."),
        ],
    )
}

fn social_entrepreneurship() -> Record {
    answer(
        7,
        "What is Social Entrepreneurship? Explain the four major elements of social entrepreneurship.",
        vec![
            heading("Definition of Social Entrepreneurship:"),
            text("Social Entrepreneurship is an approach by individuals, groups, start-up companies or entrepreneurs, in which they develop, fund and implement solutions to social, cultural, or environmental issues. It combines the passion of a social mission with the discipline, innovation, and determination traditionally associated with business entrepreneurship. Unlike traditional entrepreneurs who are primarily driven by profit, social entrepreneurs are primarily driven by a desire to create positive social impact or systemic change. However, this does not mean they ignore financial sustainability; many social enterprises aim to be financially self-sufficient or even profitable, with profits often reinvested into the social mission."),
            text("Jargon: 'Social Mission' \u{2013} The primary goal of addressing a specific social or environmental problem. 'Systemic Change' \u{2013} Fundamental change in policies, practices, or social structures to resolve underlying causes of problems."),
            text("Key figures like J. Gregory Dees have significantly contributed to defining and popularizing the concept. The core is applying entrepreneurial thinking to solve social problems."),
            heading("The Four Major Elements of Social Entrepreneurship:"),
            text("While various scholars and practitioners might emphasize different aspects, a widely accepted framework, largely influenced by J. Gregory Dees, highlights several core elements. Often, these are distilled into key characteristics. Four frequently cited major elements are:"),
            point("1. Social Mission Primacy (Adopting a mission to create and sustain social value):"),
            point("\u{2022}   This is the cornerstone of social entrepreneurship. The primary objective is to generate social value or address a pressing social/environmental need, rather than personal wealth creation. This mission is explicit, central, and drives all strategic decisions."),
            point("\u{2022}   While economic value (profit) may be pursued, it is a means to an end (achieving the social mission) rather than the end itself. The social impact is the ultimate measure of success."),
            point("\u{2022}   Example: Grameen Bank's mission to provide microcredit to impoverished women to alleviate poverty."),
            point("2. Innovation (Recognizing and relentlessly pursuing new opportunities to serve that mission):"),
            point("\u{2022}   Social entrepreneurs are not content with traditional approaches if they are ineffective. They actively seek out and apply innovative solutions to social problems. This can involve new products, services, delivery models, organizational structures, or resource mobilization strategies."),
            point("\u{2022}   This echoes Schumpeter's concept of the entrepreneur as an innovator, but applied to the social sector. It involves creativity, resourcefulness, and a willingness to challenge existing norms."),
            point("\u{2022}   Example: Aravind Eye Care System's innovative high-volume, low-cost model for cataract surgeries to combat blindness."),
            point("3. Adaptability and Continuous Learning (Engaging in a process of continuous innovation, adaptation, and learning):"),
            point("\u{2022}   The environments in which social entrepreneurs operate are often complex and dynamic. Therefore, they must be adaptable, learning from their experiences and the feedback from the communities they serve."),
            point("\u{2022}   This involves being responsive to changing needs, iterating on solutions, and being willing to modify or even abandon approaches that are not working. It's about being evidence-driven and outcome-focused."),
            point("\u{2022}   Example: Many social enterprises pivot their models based on field results and community feedback to better achieve their impact goals."),
            text("   (Note: Some frameworks might combine this with innovation or emphasize 'Scalability and Sustainability' as a distinct element for broader impact.)"),
            point("4. Entrepreneurial Acumen and Accountability (Exhibiting a heightened sense of accountability to the constituencies served and for the outcomes created):"),
            point("\u{2022}   Social entrepreneurs apply business-like discipline, determination, and resourcefulness to achieve their social goals. They are not just well-intentioned; they are also effective managers and leaders."),
            point("\u{2022}   Crucially, they hold themselves accountable for the social impact they create. This involves measuring and reporting on their social performance, not just financial performance, to stakeholders (beneficiaries, funders, staff, public)."),
            point("\u{2022}   This element emphasizes action-orientation, boldness in the face of challenges, and a commitment to producing tangible, positive results."),
            point("\u{2022}   Example: Social enterprises using impact metrics like SROI (Social Return on Investment) to demonstrate their value."),
            heading("Alternative Element Often Highlighted - **Scalability and Sustainability**:"),
            text("Many frameworks emphasize the drive to create scalable solutions that can be replicated or expanded to reach a larger population and achieve broader systemic change. Sustainability refers to the ability of the social venture to continue its operations and impact over the long term, often through diverse funding models that may include earned income."),
            heading("Conclusion:"),
            text("Social entrepreneurship represents a powerful force for positive change in the world. By combining a deep commitment to a social mission with entrepreneurial innovation, adaptability, and accountability, social entrepreneurs tackle some of society's most intractable problems. These core elements distinguish them from traditional businesses and purely charitable organizations, carving out a unique space where purpose and pragmatism intersect to create lasting social value."),
            trick("Memory Trick for Dees-inspired elements: 'Social Mission Innovates, Adapts, and is Accountable' (SMIAA). Or, use 'SPIA' if considering 'Scalability/Sustainability' as a key element over 'Adaptability': Social Mission, Pursuit of Opportunity (Innovation), Impact (Accountability), Adaptability/Action-Orientation."),
            suggestion("Diagram Suggestion: A Venn diagram showing the intersection of 'Social Mission,' 'Business Acumen,' and 'Innovation' to define Social Entrepreneurship. Or, a pillar diagram with the four elements supporting 'Social Impact'."),
            expand("Key Points to Expand Further:"),
            bullet("Provide more detailed examples of well-known social entrepreneurs or enterprises (e.g., Muhammad Yunus, Blake Mycoskie of TOMS Shoes, Wendy Kopp of Teach For America)."),
            bullet("Discuss the spectrum of social enterprises (non-profit with earned income, for-profit with social mission, hybrid models)."),
            bullet("Explore the challenges faced by social entrepreneurs (e.g., funding, measuring social impact, scaling)."),
        ],
    )
}

fn ethics() -> Record {
    answer(
        8,
        "Explain the major theories which revolve around ethics and determine ethical behaviour.",
        vec![
            heading("Introduction:"),
            text("Ethics is the branch of philosophy that involves systematizing, defending, and recommending concepts of right and wrong conduct. Ethical theories provide frameworks for determining what constitutes ethical behavior and guiding moral decision-making in various situations, including business. Understanding these theories helps individuals and organizations navigate complex ethical dilemmas and foster a culture of integrity."),
            text("Jargon: 'Ethical Dilemma' \u{2013} A situation where one must choose between two or more morally conflicting courses of action."),
            heading("Major Ethical Theories Determining Ethical Behaviour:"),
            text("Several major ethical theories have been developed over centuries, each offering a different perspective on how to determine ethical behavior. They can be broadly categorized into consequentialist (outcome-based) and non-consequentialist (duty-based or rights-based), along with character-based theories."),
            point("1. Consequentialist Theories (Teleological Ethics):"),
            text("These theories argue that the morality of an action is determined by its consequences or outcomes. An action is right if it produces good consequences and wrong if it produces bad consequences."),
            point("\u{2022}   Utilitarianism (Jeremy Bentham, John Stuart Mill): The most prominent consequentialist theory. It states that an action is ethical if it produces the 'greatest good for the greatest number' of people. Decisions are made by weighing the potential benefits and harms to all affected parties and choosing the option that maximizes overall happiness or utility. Jargon: 'Utility' \u{2013} often defined as happiness, pleasure, or well-being."),
            point("Types of Utilitarianism:"),
            point("- Act Utilitarianism: Assesses each act individually for its utility."),
            point("- Rule Utilitarianism: Suggests following moral rules that, if generally followed, would produce the greatest good."),
            point("Critiques: Can be difficult to measure and compare utility for different people; may justify actions that harm minorities if they benefit the majority; ignores intentions and rights."),
            point("\u{2022}   Ethical Egoism: Argues that an action is moral if it promotes the individual's own long-term self-interest. This is distinct from selfishness, as long-term interests might involve cooperation or short-term sacrifices."),
            point("2. Non-Consequentialist Theories (Deontological Ethics):"),
            text("These theories assert that the morality of an action is based on adherence to duties, rules, or obligations, regardless of the consequences."),
            point("\u{2022}   Kantian Ethics / Duty-Based Ethics (Immanuel Kant): Emphasizes moral duties and universal principles. Kant proposed the 'Categorical Imperative' as the supreme principle of morality."),
            point("Formulations of the Categorical Imperative:"),
            point("1. Universality: 'Act only according to that maxim whereby you can at the same time will that it should become a universal law.' (Could everyone act this way without contradiction?)."),
            point("2. Humanity as an End: 'Act in such a way that you treat humanity, whether in your own person or in the person of any other, never merely as a means to an end, but always at the same time as an end.' (Respect for persons)."),
            point("Critiques: Can be rigid and doesn't easily resolve conflicts between duties; consequences, though ignored, often seem relevant."),
            point("\u{2022}   Rights Theory (John Locke, Thomas Jefferson): Focuses on fundamental human rights that should be respected and protected. Actions are ethical if they uphold these rights (e.g., right to life, liberty, property, fair treatment). Rights can be positive (entitlements, e.g., right to education) or negative (protections from interference, e.g., right to free speech)."),
            point("Critiques: Difficult to determine which rights are fundamental and how to resolve conflicting rights."),
            point("3. Virtue Ethics (Aristotle, Plato):"),
            text("This theory focuses on the moral character of the person performing the action, rather than on duties or consequences. It asks 'What kind of person should I be?' and emphasizes cultivating virtues like honesty, compassion, courage, justice, and temperance. An action is ethical if it is what a virtuous person would do in the circumstances."),
            point("\u{2022}   It emphasizes moral education and development of good character traits (virtues) and avoidance of vices."),
            point("\u{2022}   Aristotle's concept of the 'Golden Mean' suggests that virtue often lies between two extremes (e.g., courage is the mean between cowardice and recklessness)."),
            point("\u{2022}   Critiques: Does not always provide clear guidance for specific actions; what constitutes a virtue can be culturally relative."),
            point("4. Justice Theory (John Rawls, Aristotle):"),
            text("This theory focuses on fairness, equity, and impartiality in the distribution of benefits and burdens, and in the administration of rules and procedures."),
            point("\u{2022}   Distributive Justice: Concerns the fair distribution of society's resources and opportunities (e.g., Rawls' 'Veil of Ignorance' and 'Difference Principle' \u{2013} inequalities are permissible only if they benefit the least advantaged)."),
            point("\u{2022}   Procedural Justice: Concerns the fairness of processes used to make decisions and allocate resources."),
            point("\u{2022}   Retributive Justice: Concerns the fairness of punishments for wrongdoing."),
            point("\u{2022}   Compensatory Justice: Concerns fair compensation for past injustices or harm."),
            point("\u{2022}   Critiques: Different conceptions of 'fairness' exist; can be complex to apply."),
            point("5. Ethical Relativism vs. Ethical Absolutism/Universalism:"),
            point("\u{2022}   Ethical Relativism: Argues that morality is relative to the norms of one's culture or society. What is right in one culture may be wrong in another. There are no universal moral truths."),
            point("Types: Cultural Relativism, Subjectivism (morality is relative to the individual)."),
            point("\u{2022}   Ethical Absolutism/Universalism: Proposes that there are universal moral principles that apply to everyone, everywhere, regardless of culture or individual beliefs (e.g., the UN Declaration of Human Rights leans towards this)."),
            point("Critiques of Relativism: Can lead to moral paralysis or tolerance of harmful practices; makes moral progress difficult to define. Critiques of Absolutism: Can be seen as ethnocentric or insensitive to cultural context."),
            heading("Conclusion:"),
            text("These major ethical theories provide diverse lenses through which to analyze and determine ethical behavior. In practice, individuals and organizations often draw upon a combination of these theories when making ethical decisions. An understanding of these frameworks is essential for entrepreneurs and business leaders to make responsible choices, build trust, and contribute positively to society. No single theory is universally accepted as perfect, but each offers valuable insights into the complex nature of morality."),
            trick("Memory Trick: 'Can Do Very Righteous Justice Always?' (Consequentialism/Utilitarianism, Deontology/Kantian, Virtue Ethics, Rights Theory, Justice Theory, [Ethical] Relativism/Absolutism)."),
            suggestion("Diagram Suggestion: A table comparing the theories based on their focus (consequences, duty, character, rights, fairness), key proponents, and a simple guiding question for each (e.g., Utilitarianism: 'What action yields the greatest good?')."),
            expand("Key Points to Expand Further:"),
            bullet("Apply these theories to a specific business ethical dilemma (e.g., child labor in supply chains, environmental pollution, misleading advertising)."),
            bullet("Discuss the role of professional codes of ethics and how they relate to these theories."),
            bullet("Explore the concept of 'stakeholder theory' in business ethics and its connection to utilitarian and rights-based approaches."),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_text_only_answers() {
        let records = records();
        assert_eq!(records.len(), 8);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.key.sequence, i as u32 + 1);
            assert_eq!(record.key.group, JUNE_2023);
            assert!(record.recipe.is_none());
            assert!(!record.prompt.starts_with(char::is_numeric));
        }
    }

    #[test]
    fn test_every_answer_ends_with_study_aids() {
        for record in records() {
            let count = |pred: fn(&BodyBlock) -> bool| {
                record.body.iter().filter(|b| pred(b)).count()
            };
            assert_eq!(count(|b| matches!(b, BodyBlock::Trick(_))), 1, "{}", record.key);
            assert_eq!(count(|b| matches!(b, BodyBlock::Suggestion(_))), 1, "{}", record.key);
            assert_eq!(count(|b| matches!(b, BodyBlock::Expand(_))), 1, "{}", record.key);
            assert!(matches!(record.body.last(), Some(BodyBlock::Bullet(_))));
        }
    }

    #[test]
    fn test_nested_points_under_leasing() {
        let finance = &records()[4];
        let nested: Vec<&BodyBlock> = finance
            .body
            .iter()
            .filter(|b| matches!(b, BodyBlock::SubPoint(_)))
            .collect();
        assert_eq!(nested.len(), 4);
        assert_eq!(
            nested[0],
            &sub_point("Leasing: Acquiring the use of an asset (e.g., equipment, vehicles) by paying regular lease rentals for a specified period, without owning it. This avoids large upfront capital expenditure.")
        );
    }
}
