//! Purposes data is collected for

vocabulary! {
    pub enum DataPurpose in "data purpose" {
        Administration => "administration", "We use this information for the provision, maintenance and administration of our services and to monitor and protect the security of our services.";
        Advertising => "advertising", "We use this information to provide meaningful and unobtrusive advertising to you.";
        CustomerSupport => "customer_support", "We use this information to provide customer service to you, to answer your questions and to communicate with you about your use of our services.";
        Fulfillment => "fulfillment", "We use this information to provide and fulfill the specific services that you explicitly request.";
        Marketing => "marketing", "We use this information for marketing and promotional purposes.";
        Personalization => "personalization", "We use this information to personalize our services for you and to adjust them to your preferences.";
        Research => "research", "We use this information to improve our services through research and analysis and to better understand how our services are used.";
    }
}
