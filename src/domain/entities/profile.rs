/// Card catalogue the offer provider is restricted to
pub const CARD_CATALOGUE: &str = "\
1. Amazon Pay ICICI Credit Card: 5% cashback on Amazon for Prime members, 3% for non-Prime, 2% on Amazon Pay partner merchants, 1% on everything else. No annual fee.
2. HDFC Millennia Credit Card: 5% cashback on Amazon, Flipkart, Myntra, Swiggy, Zomato and other partner brands, 1% on other spends. Fee waived on spends above Rs 1,00,000 a year.
3. SBI Cashback Credit Card: 5% cashback on all online spends, 1% on offline spends. Monthly cashback capped at Rs 5,000.
4. Flipkart Axis Bank Credit Card: 5% cashback on Flipkart and Cleartrip, 4% on Swiggy, PVR, Uber and Cult.fit, 1.5% on other spends.
5. HDFC Swiggy Credit Card: 10% cashback on Swiggy food, Instamart and Dineout, 5% on online shopping categories, 1% on other spends.
6. Axis Bank ACE Credit Card: 5% cashback on bill payments through Google Pay, 4% on Swiggy, Zomato and Ola, 1.5% on other spends.";

/// Canned facts about Roy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub full_name: String,
    pub role: String,
    pub email: String,
    pub company: String,
    pub team: String,
    pub manager: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Roy".to_string(),
            full_name: "Roy Varghese".to_string(),
            role: "Senior Software Engineer".to_string(),
            email: "roy.varghese@example.com".to_string(),
            company: "Acme Technologies".to_string(),
            team: "Platform Engineering".to_string(),
            manager: "Priya Sharma".to_string(),
        }
    }
}

impl Profile {
    pub fn identity_answer(&self) -> String {
        format!(
            "{} is a {} on the {} team at {}. I'm Roy's assistant and can help while Roy is away.",
            self.full_name, self.role, self.team, self.company
        )
    }

    pub fn full_name_answer(&self) -> String {
        format!("Roy's full name is {}.", self.full_name)
    }

    pub fn email_answer(&self) -> String {
        format!("You can email Roy at {}.", self.email)
    }

    pub fn company_answer(&self) -> String {
        format!("Roy works at {}.", self.company)
    }

    pub fn team_answer(&self) -> String {
        format!("Roy is part of the {} team.", self.team)
    }

    pub fn manager_answer(&self) -> String {
        format!("Roy reports to {}.", self.manager)
    }

    pub fn personal_info_refusal(&self) -> String {
        "Sorry, I can't share Roy's personal information. Please ask Roy directly.".to_string()
    }
}
