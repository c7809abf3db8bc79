//! Policy in natural language
//!
//!     Assembles a [`PrivacyPolicy`] into a definition list, one group per section, in a
//!     fixed order:
//!
//!         dates, version, latest version
//!         general, principles, children, email, cookies
//!         information we collect (one nested list per data group and per element)
//!         mandatory disclosure, retention, service providers, international transfers,
//!         mergers, security, external links, rights, changes, contact
//!
//!     Sections that depend on a setting are left out when it is off. Every sentence goes
//!     through the translator; titles and descriptions of data groups are the user's own
//!     text and are used as given.

use crate::data::{DataElement, DataGroup};
use crate::error::PolicyError;
use crate::i18n::{FormatArg, Language, Translator};
use crate::markup::{
    Abbreviation, Concatenation, DefinitionGroup, DefinitionList, Link, MarkupNode, Render, Text,
    MIDDLE_DOT, SPACE,
};
use crate::policy::PrivacyPolicy;
use crate::scope::Scope;
use crate::vocabulary::DataRequirement;
use tracing::debug;

/// A policy together with the language it is written in
#[derive(Debug, Clone)]
pub struct HumanPolicy<'a> {
    policy: &'a PrivacyPolicy,
    translator: Translator,
}

impl<'a> HumanPolicy<'a> {
    pub fn new(policy: &'a PrivacyPolicy, translator: Translator) -> Self {
        Self { policy, translator }
    }

    pub fn in_language(policy: &'a PrivacyPolicy, language: Language) -> Self {
        Self::new(policy, Translator::new(language))
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn short_title(&self) -> &'static str {
        self.translator.language().short_title()
    }

    pub fn long_title(&self) -> &'static str {
        self.translator.language().long_title()
    }

    pub fn to_html(&self) -> Result<String, PolicyError> {
        Ok(self.to_markup()?.to_html())
    }

    pub fn to_plain_text(&self) -> Result<String, PolicyError> {
        Ok(self.to_markup()?.to_plain_text())
    }

    pub fn to_markdown(&self) -> Result<String, PolicyError> {
        Ok(self.to_markup()?.to_markdown())
    }

    /// The whole document as a definition list
    pub fn to_markup(&self) -> Result<DefinitionList, PolicyError> {
        debug!(
            language = %self.translator.language(),
            data_groups = self.policy.data_groups.len(),
            "Assembling policy"
        );

        let policy = self.policy;
        let list = DefinitionList::new()
            .optional_group(self.date_group("Date of publication", policy.published_at)?)
            .optional_group(self.date_group("Effective date", policy.takes_effect_at)?)
            .optional_group(self.date_group("Date of expiration", policy.expires_at)?)
            .optional_group(match &policy.version_name {
                Some(version) => Some(
                    DefinitionGroup::new(self.lang("Version")?).definition(version.as_str()),
                ),
                None => None,
            })
            .optional_group(match &policy.canonical_url {
                Some(url) => Some(
                    DefinitionGroup::new(self.lang("Latest version")?)
                        .definition(Link::new(url.as_str())),
                ),
                None => None,
            })
            .group(self.general()?)
            .group(self.principles()?)
            .optional_group(self.children()?)
            .optional_group(self.email_communication()?)
            .optional_group(self.cookies()?)
            .optional_group(self.information_collected()?)
            .group(self.mandatory_disclosure()?)
            .group(self.retention_and_deletion()?)
            .optional_group(self.service_providers()?)
            .optional_group(self.international_transfers()?)
            .optional_group(self.mergers_and_acquisitions()?)
            .group(self.security()?)
            .group(self.external_links()?)
            .optional_group(self.rights()?)
            .group(self.changes()?)
            .optional_group(self.contact()?);

        Ok(list)
    }

    fn lang(&self, source: &str) -> Result<String, PolicyError> {
        self.translator.text(source)
    }

    fn lang_with(&self, source: &str, args: &[FormatArg]) -> Result<String, PolicyError> {
        self.translator.translate(source, args)
    }

    /// Translate each sentence and join them into one paragraph
    fn paragraph(&self, sentences: &[&str]) -> Result<String, PolicyError> {
        let translated = sentences
            .iter()
            .map(|sentence| self.lang(sentence))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(translated.join(SPACE))
    }

    fn date_group(
        &self,
        term: &str,
        unix_seconds: Option<i64>,
    ) -> Result<Option<DefinitionGroup>, PolicyError> {
        match unix_seconds {
            Some(unix_seconds) => Ok(Some(
                DefinitionGroup::new(self.lang(term)?)
                    .definition(self.translator.format_date(unix_seconds)?),
            )),
            None => Ok(None),
        }
    }

    fn scope_description(&self, scope: &Scope) -> Result<String, PolicyError> {
        match scope {
            Scope::Website { .. } => self.lang("Website"),
            Scope::AndroidApp { .. } => self.lang("Android app (available from “Google Play”, a digital distribution platform operated by Google Inc.)"),
            Scope::IosApp { .. } => self.lang("iOS app (available from the “App Store”, a digital distribution platform operated by Apple Inc.)"),
        }
    }

    fn general(&self) -> Result<DefinitionGroup, PolicyError> {
        let has_scopes = !self.policy.scopes.is_empty();

        let mut applies_to = self.lang("The policy applies to our websites, mobile apps, software applications, products and services, collectively referred to as “services”.")?;
        if has_scopes {
            applies_to.push_str(SPACE);
            applies_to.push_str(&self.lang("These services include:")?);
        }

        let scopes = if has_scopes {
            let list = self
                .policy
                .scopes
                .iter()
                .map(|scope| {
                    Ok(DefinitionGroup::new(scope)
                        .definition(self.scope_description(scope)?))
                })
                .collect::<Result<DefinitionList, PolicyError>>()?;
            Some(list)
        } else {
            None
        };

        Ok(DefinitionGroup::new(self.lang("General")?)
            .definition(self.paragraph(&[
                "Protecting your privacy and keeping your personal information safe is our highest priority.",
                "This privacy statement (“privacy policy” or “policy”) is designed to help you better understand how and to what extent we collect, use, disclose, transfer and store your information.",
            ])?)
            .definition(applies_to)
            .optional_definition(scopes)
            .definition(self.lang("This privacy policy governs your use of our services regardless of the domain names, operating systems, platforms or devices that are used to access the services, and regardless of whether such access is in connection with an account or not.")?)
            .definition(self.lang("As a condition for your use of our services as a customer, user or visitor (collectively referred to as a “user” or as your “use”), you consent to the terms of this policy and you agree that your personal information will be handled as outlined below.")?))
    }

    fn principles(&self) -> Result<DefinitionGroup, PolicyError> {
        let policy = self.policy;
        let rights = &policy.rights;

        let not_traded = if policy.user_data_traded {
            None
        } else {
            Some(self.lang("We never sell, rent out or trade any of our user’s personal information with third parties for commercial purposes.")?)
        };
        let minimization = if policy.data_minimization_goal {
            Some(self.lang("We always collect only the minimum amount of personal information necessary to provide our services to you, unless you choose to provide more such information voluntarily.")?)
        } else {
            None
        };
        let simple_ways = if rights.access && rights.rectification && rights.erasure {
            Some(self.lang("We offer you simple ways to view, update or delete the data we have collected about you.")?)
        } else {
            None
        };

        Ok(DefinitionGroup::new(self.lang("Our principles")?)
            .optional_definition(not_traded)
            .optional_definition(minimization)
            .definition(self.paragraph(&[
                "We encourage you to give us, and, more generally, any provider of digital services, only the amount of data you are comfortable sharing.",
                "If in doubt, rather do not share sensitive information.",
            ])?)
            .optional_definition(simple_ways))
    }

    fn children(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        let age = match self.policy.minimum_age_of_children() {
            Some(age) => FormatArg::from(age),
            None => return Ok(None),
        };
        let age = std::slice::from_ref(&age);

        let never_knowingly = [
            self.lang_with("We never knowingly collect any information from children under %d.", age)?,
            self.lang("If you are a child below that age, you may not use any of our services.")?,
        ]
        .join(SPACE);

        let mut contact_us = self.lang_with("Should you believe that we might have any personal information of a child under the age of %d, in particular a child of your own, please contact us so that the data in question can be deleted, if appropriate.", age)?;
        if self.policy.has_contact_information() {
            contact_us.push_str(SPACE);
            contact_us.push_str(&self.lang("For our contact information, please see further below.")?);
        }

        Ok(Some(
            DefinitionGroup::new(self.lang("Children’s Online Privacy Protection")?)
                .definition(self.lang_with("None of our services are designed for, intended to attract, or directed towards children under the age of %d.", age)?)
                .definition(never_knowingly)
                .definition(self.lang_with("If we have any plausible reason to believe that you are a user who is under the age of %d, we will have to prohibit you from continuing your use of our services.", age)?)
                .definition(contact_us),
        ))
    }

    fn email_communication(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        if !self.policy.promotional_email_opt_out {
            return Ok(None);
        }

        Ok(Some(
            DefinitionGroup::new(self.lang("Email communication")?)
                .definition(self.lang("You may opt out of receiving any newsletters or promotional messages from us at any time.")?)
                .definition(self.lang("This is possible either by using the “Unsubscribe” feature at the bottom of such emails that we may send, or by adjusting the settings in your account within our services, where applicable.")?)
                .definition(self.lang("You will continue to receive essential, non-promotional messages regarding your account, such as technical notices, order confirmations, or other service-related messages, which are required for us to be able to provide our services to you.")?),
        ))
    }

    fn cookies(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        if !self.policy.has_cookies() {
            return Ok(None);
        }

        let mut group = DefinitionGroup::new(self.lang("Cookies")?);

        if self.policy.first_party_cookies {
            group = group
                .definition(self.paragraph(&[
                    "Cookies are minimal text files that contain small amounts of data.",
                    "They are transferred from our servers to your device through your web browser or app.",
                    "Your web browser or app then sends these small text files back to us whenever you access our services.",
                ])?)
                .definition(self.paragraph(&[
                    "These cookies do not necessarily contain any personal or identifying information.",
                    "They are, however, commonly used to store a unique identifier for every individual user, so that our servers do not lose information on who you are while you are moving through the individual parts of our services.",
                ])?)
                .definition(self.paragraph(&[
                    "We may use cookies and similar technologies, such as “Web Storage” (specifically “localStorage”) and “Internal Storage”, to make interactions with our services more convenient, efficient and secure.",
                    "For example, we may use these technologies to keep you signed in and to remember your preferences with regard to our services.",
                ])?)
                .definition(self.paragraph(&[
                    "As such, cookies and the related technologies are essential for the operation of our services.",
                    "You therefore consent to our use of cookies and related technologies when using our services.",
                    "Without these technologies, use of our services would not be reasonably possible.",
                ])?)
                .definition(self.paragraph(&[
                    "Your web browser or operating system usually provides means to delete such data currently stored on your device.",
                    "They may even provide methods to disable the use of such technologies completely.",
                    "You are welcome to make use of these settings and features of your web browser or operating system, but that may prevent our services from working correctly for you.",
                    "For more information on how to delete such data currently stored on your device, please refer to the manual or help section of your web browser or operating system.",
                ])?);
        }

        if self.policy.third_party_cookies {
            let third_party = DefinitionGroup::new(self.lang("Third-party cookies")?)
                .definition(self.lang("Some contents of our services are provided by third parties that are not directly affiliated with us.")?)
                .definition(self.lang("These external contents, which are displayed, rendered, played back or otherwise conveyed directly within our services, may include advertising, analytics and components from social media.")?)
                .definition(self.lang("The third parties that provide these contents may store cookies on your device for their own purposes and interests, which we cannot control.")?)
                .definition(self.lang("The settings and features of your web browser or operating system may allow you to control how third parties can store cookies on your device.")?);
            group = group.definition(DefinitionList::new().group(third_party));
        }

        Ok(Some(group))
    }

    fn information_collected(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        if self.policy.data_groups.is_empty() {
            return Ok(None);
        }

        let lists = self
            .policy
            .data_groups
            .iter()
            .map(|data_group| Ok(DefinitionList::new().group(self.data_group(data_group)?)))
            .collect::<Result<Vec<_>, PolicyError>>()?;

        Ok(Some(
            DefinitionGroup::new(self.lang("Information we collect and why we collect it")?)
                .definitions_from(lists),
        ))
    }

    /// "Required: yes", with the meaning of the requirement as the expansion
    fn requirement(&self, requirement: DataRequirement) -> Result<Concatenation, PolicyError> {
        let answer = if requirement.is_required() {
            self.lang("yes")?
        } else {
            self.lang("no")?
        };

        Ok(Concatenation::new()
            .element(Text::new(self.lang("Required:")?))
            .element(Abbreviation::new(answer).with_expansion(self.lang(requirement.display_name())?)))
    }

    /// A label followed by abbreviations separated by middle dots
    fn dotted(
        &self,
        label: &str,
        items: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Result<Concatenation, PolicyError> {
        let mut concatenation = Concatenation::new().element(Text::new(self.lang(label)?));
        for (index, (name, citation)) in items.into_iter().enumerate() {
            if index > 0 {
                concatenation = concatenation.element(Text::new(MIDDLE_DOT));
            }
            concatenation = concatenation
                .element(Abbreviation::new(self.lang(name)?).with_expansion(self.lang(citation)?));
        }
        Ok(concatenation)
    }

    fn data_group(&self, data_group: &DataGroup) -> Result<DefinitionGroup, PolicyError> {
        let mut group = DefinitionGroup::new(data_group.title.as_str())
            .optional_definition(data_group.description.as_deref())
            .definition(self.requirement(data_group.requirement)?);

        if !data_group.bases.is_empty() {
            group = group.definition(self.dotted(
                "Lawful basis:",
                data_group
                    .bases
                    .iter()
                    .map(|basis| (basis.display_name(), basis.legal_citation())),
            )?);
        }

        if !data_group.special_conditions.is_empty() {
            group = group.definition(self.dotted(
                "Condition for the processing of special categories of personal data:",
                data_group
                    .special_conditions
                    .iter()
                    .map(|condition| (condition.display_name(), condition.legal_citation())),
            )?);
        }

        for purpose in &data_group.purposes {
            group = group.definition(self.lang(purpose.display_name())?);
        }

        for element in &data_group.elements {
            group = group.definition(DefinitionList::new().group(self.data_element(element)?));
        }

        Ok(group)
    }

    fn data_element(&self, element: &DataElement) -> Result<DefinitionGroup, PolicyError> {
        let retention = match element.max_retention {
            Some(hours) => Some(self.lang_with(
                "Maximum retention time: %s",
                &[FormatArg::from(self.translator.format_retention(hours))],
            )?),
            None => None,
        };

        Ok(DefinitionGroup::new(self.lang(element.data_type.display_name())?)
            .definition(self.requirement(element.requirement)?)
            .optional_definition(retention))
    }

    fn mandatory_disclosure(&self) -> Result<DefinitionGroup, PolicyError> {
        Ok(DefinitionGroup::new(self.lang("Mandatory disclosure")?)
            .definition(self.lang("Laws in the jurisdictions that we operate in may obligate us to disclose certain personal information or other information that we collect about our users to local law enforcement authorities.")?)
            .definition(self.lang("We may be compelled to such disclosure in response to a court order, a warrant or a similar request by a judicial body or a government agency, or when we believe in good faith that the disclosure is reasonably necessary to protect our rights or property, that of any third party, or the safety of the general public.")?)
            .definition(self.lang("In any case, we will provide data only to the extent necessary to satisfy the request, and, whenever possible and legally permitted, we will make a reasonable effort to notify affected users of any such disclosure.")?))
    }

    fn retention_and_deletion(&self) -> Result<DefinitionGroup, PolicyError> {
        let policy = self.policy;

        let deletion = if policy.account_deletable {
            let mut sentences = self.paragraph(&[
                "If you would like to cancel your use of our services, delete your account, or delete your personal information, you may do so in the respective sections of our services.",
                "If you need help, please contact us.",
            ])?;
            if policy.has_contact_information() {
                sentences.push_str(SPACE);
                sentences.push_str(&self.lang("See further below for our contact information.")?);
            }
            Some(sentences)
        } else {
            None
        };

        let backups = if policy.preservation_in_backups {
            Some(self.paragraph(&[
                "In order to prevent loss of data due to human errors or system failures, we keep additional backup copies of data, as most companies and service providers do, which may include some of your personal information.",
                "This means that parts of your personal information may temporarily remain on our servers even after deletion or termination of your use of our services.",
            ])?)
        } else {
            None
        };

        Ok(DefinitionGroup::new(self.lang("Retention and deletion of data")?)
            .definition(self.lang("We will retain certain pieces of personal information for as long as you use our services, as long as your account exists, or as long as needed for us to be able to provide our services to you.")?)
            .optional_definition(deletion)
            .optional_definition(backups)
            .definition(self.lang("We may retain and use your personal information and data as necessary to comply with our legal obligations, to resolve disputes, and to enforce our rights and agreements.")?))
    }

    fn service_providers(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        if !self.policy.third_party_service_providers {
            return Ok(None);
        }

        Ok(Some(
            DefinitionGroup::new(self.lang("Service providers, contractors and agents")?)
                .definition(self.lang("From time to time, we may share some information we have collected from you, including personal information, with a limited number of third-party vendors, service providers, contractors, resellers, agents or business partners, solely for the purpose of performing certain functions on our behalf.")?)
                .definition(self.paragraph(&[
                    "Such third parties help us provide and improve our services.",
                    "Functions performed by them on our behalf may include payment processing, network data transmission, fraud prevention, customer support management and similar services.",
                ])?)
                .definition(self.lang("These third parties do not have any right to use the information that we share about you beyond what is necessary to assist us with the specific task at hand.")?),
        ))
    }

    fn international_transfers(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        if !self.policy.international_transfers {
            return Ok(None);
        }

        let safeguards = DefinitionGroup::new(self.lang("We verify that at least one of the following safeguards is implemented:")?)
            .definition(self.lang("The country of the recipient has been deemed to provide an adequate level of protection for personal data by the European Commission.")?)
            .definition(self.lang("The recipient is certified as part of the EU-US and Swiss-US Privacy Shield Frameworks.")?)
            .definition(self.lang("Standard Contractual Clauses, as adopted by or approved by the European Commission, are in place.")?)
            .definition(self.lang("The recipient has Binding Corporate Rules that guarantee the protection of personal data.")?);

        Ok(Some(
            DefinitionGroup::new(self.lang("International data transfers")?)
                .definition(self.paragraph(&[
                    "Some of our external service providers and recipients of personal data are based outside your country and outside our country.",
                    "This means that the processing of your personal data by those third parties involves an international transfer of your data to a third country.",
                    "Such third countries may have data protection rules that are different from those in your or our country.",
                ])?)
                .definition(self.lang("Thus, for any international transfer of data, we ensure that appropriate technical, organizational and contractual measures are in place to guarantee that a similar degree of protection is afforded to your data internationally and that your personal data remains protected to the standards described in this policy.")?)
                .definition(DefinitionList::new().group(safeguards))
                .definition(self.lang("Please contact us if you want further information on the specific mechanisms used by us when transferring your personal data internationally.")?),
        ))
    }

    fn mergers_and_acquisitions(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        if !self.policy.transfer_upon_merger_or_acquisition {
            return Ok(None);
        }

        let notification = [
            self.lang_with(
                "You will be notified via a prominent notice within our services or by email to the primary email address specified in your account at least %d days before any such transfer of your personal information.",
                &[FormatArg::from(self.policy.notification_period)],
            )?,
            self.lang("This notification will include help on choices you may have regarding the transfer and treatment of your personal information.")?,
        ]
        .join(SPACE);

        Ok(Some(
            DefinitionGroup::new(self.lang("Mergers and acquisitions")?)
                .definition(self.lang("If we are involved in a merger, an acquisition by another company, or a sale of all or a portion of our business or assets, your information will likely be among the assets transferred.")?)
                .definition(self.lang("If any such change of ownership happens, the organization receiving your personal information will have to respect the promises that we have made in any pre-existing privacy policy such as this one.")?)
                .definition(notification),
        ))
    }

    fn security(&self) -> Result<DefinitionGroup, PolicyError> {
        let tls = if self.policy.tls_everywhere {
            Some(self.lang("In particular, all connections to and from our services are encrypted using Secure Sockets Layer (SSL) and Transport Layer Security (TLS) technologies.")?)
        } else {
            None
        };

        Ok(DefinitionGroup::new(self.lang("How we secure your information")?)
            .definition(self.paragraph(&[
                "We take the trust that you place in us very seriously.",
                "We have therefore implemented all measures reasonably necessary to protect the personal information of our users from unauthorized access, modification, deletion, disclosure or other misuse.",
            ])?)
            .definition(self.lang("We follow generally accepted industry standards to protect the data submitted to us, both during transmission and after we have received it, and continue to expand our protections as becomes necessary with changing technology.")?)
            .optional_definition(tls)
            .definition(self.paragraph(&[
                "However, please be aware that, despite our best efforts, no method of electronic transmission or storage is perfectly secure and no measures can guarantee absolute security.",
                "Hardware or software failure as well as other factors may compromise the security of user information, as is the case with all other providers of digital services.",
            ])?)
            .definition(self.paragraph(&[
                "Apart from that, please recognize that protecting your personal information is, in other parts, also your own responsibility.",
                "Especially, you are responsible for safeguarding any passwords and other authentication information that you use to access our services, as well as limiting physical access to the devices used.",
            ])?)
            .definition(self.lang("You should never disclose your authentication information to any third party and you should notify us immediately of any unauthorized use of your account.")?))
    }

    fn external_links(&self) -> Result<DefinitionGroup, PolicyError> {
        Ok(DefinitionGroup::new(self.lang("Links to external websites, applications and products")?)
            .definition(self.lang("Some parts and sections of our services may contain external links to websites, applications or products owned by and operated by third parties.")?)
            .definition(self.paragraph(&[
                "We advise you to verify the privacy practices of those third parties individually.",
                "We have no knowledge about and are not responsible for the way that those third parties handle any personal information which you provide to them yourself.",
            ])?)
            .definition(self.lang("We encourage you not to provide any personal information to those third parties before assuring yourself of proper privacy practices on their part.")?))
    }

    /// A nested list with a single right, its GDPR article as the expansion of the term
    fn right(
        &self,
        name: &str,
        article: &str,
        explanation: &str,
    ) -> Result<DefinitionList, PolicyError> {
        let term = Abbreviation::new(self.lang(name)?).with_expansion(self.lang(article)?);
        Ok(DefinitionList::new().group(DefinitionGroup::new(term).definition(self.lang(explanation)?)))
    }

    fn rights(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        let rights = &self.policy.rights;
        if !rights.any() {
            return Ok(None);
        }

        let mut granted = Vec::new();
        if rights.access {
            granted.push(self.right(
                "Access your personal data",
                "Right of access (EU, General Data Protection Regulation (GDPR), Article 15)",
                "You have the right to be informed of and request access to the personal data we process about you.",
            )?);
        }
        if rights.rectification {
            granted.push(self.right(
                "Update your personal data",
                "Right to rectification (EU, General Data Protection Regulation (GDPR), Article 16)",
                "You have the right to request that we amend or update your personal data where it is inaccurate or incomplete.",
            )?);
        }
        if rights.erasure {
            granted.push(self.right(
                "Erase your personal data",
                "Right to erasure (EU, General Data Protection Regulation (GDPR), Article 17)",
                "You have the right to request that we delete your personal data.",
            )?);
        }
        if rights.restriction {
            granted.push(self.right(
                "Restrict the use of your personal data",
                "Right to restriction of processing (EU, General Data Protection Regulation (GDPR), Article 18)",
                "You have the right to request that we temporarily or permanently stop processing your personal data.",
            )?);
        }
        if rights.portability {
            granted.push(self.right(
                "Export your personal data",
                "Right to data portability (EU, General Data Protection Regulation (GDPR), Article 20)",
                "You have the right to request a copy of your personal data in electronic and machine-readable form, and the right to transmit that personal data to another service provider.",
            )?);
        }
        if rights.object {
            granted.push(self.right(
                "Object to direct marketing",
                "Right to object (EU, General Data Protection Regulation (GDPR), Article 21)",
                "You have the right to object to your personal data being processed for direct marketing purposes.",
            )?);
            granted.push(self.right(
                "Object to the use of your personal data",
                "Right to object (EU, General Data Protection Regulation (GDPR), Article 21)",
                "You have the right to object to us processing your personal data on grounds relating to your particular situation where we no longer have a legitimate reason or legal need to process it.",
            )?);
        }
        if rights.automated_decisions {
            granted.push(self.right(
                "Object to automated decision-making",
                "Rights related to automated individual decision-making, including profiling (EU, General Data Protection Regulation (GDPR), Article 22)",
                "You have the right not to be subject to a decision based solely on automated decision-making, including profiling, where the decision would have a legal effect on you or produce a similarly significant effect.",
            )?);
        }

        let mut questions = self.lang("If you have any questions regarding the protection of your data, your rights, or how to exercise them, please contact us.")?;
        if self.policy.has_contact_information() {
            questions.push_str(SPACE);
            questions.push_str(&self.lang("For our contact information, please see further below.")?);
        }
        questions.push_str(SPACE);
        questions.push_str(&self.lang("Upon verification of your identity, we will respond to your request within a reasonable period of time.")?);

        let authority = &self.policy.supervisory_authority;
        let mut unsatisfied = self.lang("If you are unsatisfied with our response or with the way we are processing your personal data, you may contact your local data protection authority.")?;
        if authority.is_set() {
            unsatisfied.push_str(SPACE);
            unsatisfied.push_str(&self.lang("You may also contact the data protection authority that is responsible for us:")?);
        }

        let authority_markup: Option<MarkupNode> = match (&authority.url, &authority.name) {
            (Some(url), Some(name)) => Some(Link::new(url.as_str()).with_label(name.as_str()).into()),
            (Some(url), None) => Some(Link::new(url.as_str()).into()),
            (None, Some(name)) => Some(name.as_str().into()),
            (None, None) => None,
        };

        Ok(Some(
            DefinitionGroup::new(self.lang("Your rights")?)
                .definition(self.lang("Except as limited under applicable law, you have the following rights with regard to your personal data:")?)
                .definitions_from(granted)
                .definition(questions)
                .definition(unsatisfied)
                .optional_definition(authority_markup)
                .definition(self.lang("You are free to file a complaint with the data protection authority.")?),
        ))
    }

    fn changes(&self) -> Result<DefinitionGroup, PolicyError> {
        let substantial = [
            self.lang_with(
                "Should there be any substantial changes to this policy with material effects on any of your rights or choices, you will be notified via a prominent notice within our services or by email to the primary email address specified in your account at least %d days prior to such changes taking effect.",
                &[FormatArg::from(self.policy.notification_period)],
            )?,
            self.lang("This notification will include help on choices you may have regarding the treatment of your personal information.")?,
        ]
        .join(SPACE);

        Ok(DefinitionGroup::new(self.lang("Changes to this privacy policy")?)
            .definition(self.paragraph(&[
                "We may change this privacy policy from time to time.",
                "Most changes will presumably be minor only and will therefore not affect your rights.",
            ])?)
            .definition(substantial)
            .definition(self.lang("For any less significant changes to this privacy policy that do not affect your rights or choices in a material way, we encourage all users to check this policy for updated versions periodically.")?)
            .definition(self.lang("In general, the applicable version of this policy is the one that is current at the time of your access of our services.")?))
    }

    fn contact(&self) -> Result<Option<DefinitionGroup>, PolicyError> {
        let policy = self.policy;
        if !policy.has_contact_information() {
            return Ok(None);
        }

        let mut group = DefinitionGroup::new(self.lang("Contact information of the controller")?)
            .definition(self.paragraph(&[
                "If you have any questions or concerns regarding this policy, our privacy practices or certain aspects of our services, please contact us at any time.",
                "We want to help and will be happy to address your concerns.",
                "We are responsible for the processing of personal data under this policy.",
            ])?);

        if let Some(email) = &policy.contact_email {
            group = group
                .definition(self.lang("You can reach us via email at:")?)
                .definition(Link::new(format!("mailto:{}", email)).with_label(email.as_str()));
        }

        match (&policy.contact_image, &policy.contact_url) {
            (Some(image), Some(url)) => {
                group = group.definition(
                    Link::new(url.as_str())
                        .with_label(image.to_image()?)
                        .with_description(image.alt_text.as_str()),
                );
            }
            (Some(image), None) => {
                group = group.definition(image.to_image()?);
            }
            (None, Some(url)) => {
                group = group
                    .definition(self.lang("Our full contact information can be found at:")?)
                    .definition(Link::new(url.as_str()));
            }
            (None, None) => {}
        }

        Ok(Some(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{DataBasis, DataPurpose, DataType};

    fn terms(list: &DefinitionList) -> Vec<String> {
        list.groups()
            .iter()
            .map(|group| group.term().to_plain_text())
            .collect()
    }

    #[test]
    fn test_minimal_policy_sections() {
        let policy = PrivacyPolicy::new();
        let markup = HumanPolicy::in_language(&policy, Language::English)
            .to_markup()
            .unwrap();
        assert_eq!(
            terms(&markup),
            vec![
                "General",
                "Our principles",
                "Children’s Online Privacy Protection",
                "Email communication",
                "Cookies",
                "Mandatory disclosure",
                "Retention and deletion of data",
                "Service providers, contractors and agents",
                "Mergers and acquisitions",
                "How we secure your information",
                "Links to external websites, applications and products",
                "Changes to this privacy policy",
            ]
        );
    }

    #[test]
    fn test_optional_sections_follow_settings() {
        let mut policy = PrivacyPolicy::new()
            .with_version_name("v1")
            .with_children_minimum_age(None);
        policy.promotional_email_opt_out = false;
        policy.first_party_cookies = false;
        policy.third_party_cookies = false;
        policy.third_party_service_providers = false;
        policy.transfer_upon_merger_or_acquisition = false;

        let markup = HumanPolicy::in_language(&policy, Language::English)
            .to_markup()
            .unwrap();
        assert_eq!(
            terms(&markup),
            vec![
                "Version",
                "General",
                "Our principles",
                "Mandatory disclosure",
                "Retention and deletion of data",
                "How we secure your information",
                "Links to external websites, applications and products",
                "Changes to this privacy policy",
            ]
        );
    }

    #[test]
    fn test_data_group_lines() {
        let policy = PrivacyPolicy::new().data_group(
            DataGroup::new("Server logs")
                .with_description("Collected on every request.")
                .basis(DataBasis::LegitimateInterests)
                .basis(DataBasis::LegalObligation)
                .purpose(DataPurpose::Administration)
                .element(DataElement::new(DataType::AccessIpAddress).with_max_retention(168)),
        );
        let human = HumanPolicy::in_language(&policy, Language::English);
        let text = human.to_plain_text().unwrap();

        assert!(text.contains("\tServer logs\n\t\tCollected on every request.\n"));
        assert!(text.contains("\t\tRequired: yes (This information is required for the operation of our services and its collection is therefore a condition for your use of our services.)"));
        assert!(text.contains("Lawful basis: legitimate interests ("));
        assert!(text.contains("6(1)(f)).) · legal obligation ("));
        assert!(text.contains("\t\tInternet Protocol (IP) address for each access\n"));
        assert!(text.contains("\t\t\tMaximum retention time: 7 days"));
    }

    #[test]
    fn test_children_age_is_substituted() {
        let policy = PrivacyPolicy::new().with_children_minimum_age(Some(16));
        let text = HumanPolicy::in_language(&policy, Language::English)
            .to_plain_text()
            .unwrap();
        assert!(text.contains("directed towards children under the age of 16."));
        assert!(text.contains(
            "We never knowingly collect any information from children under 16. If you are a child below that age, you may not use any of our services."
        ));
    }

    #[test]
    fn test_zero_minimum_age_drops_children_section() {
        let policy = PrivacyPolicy::new().with_children_minimum_age(Some(0));
        let markup = HumanPolicy::in_language(&policy, Language::English)
            .to_markup()
            .unwrap();
        assert!(!terms(&markup).contains(&"Children’s Online Privacy Protection".to_string()));
        assert!(!markup.to_plain_text().contains("under the age of 0"));
    }

    #[test]
    fn test_contact_image_is_linked_to_contact_url() {
        let policy = PrivacyPolicy::new()
            .with_contact_url("https://www.example.com/contact.html")
            .with_contact_image(crate::policy::ContactImage {
                source: "https://www.example.com/contact.png".to_string(),
                alt_text: "Jane Doe".to_string(),
                width: Some(420),
                height: None,
            });
        let markdown = HumanPolicy::in_language(&policy, Language::English)
            .to_markdown()
            .unwrap();
        assert!(markdown.contains(
            "[![Jane Doe](https://www.example.com/contact.png) – Jane Doe](https://www.example.com/contact.html)"
        ));
        assert!(!markdown.contains("Our full contact information can be found at:"));
    }

    #[test]
    fn test_titles() {
        let policy = PrivacyPolicy::new();
        let human = HumanPolicy::in_language(&policy, Language::German);
        assert_eq!(human.short_title(), "Datenschutz");
        assert_eq!(human.long_title(), "Datenschutzerklärung");
    }
}
