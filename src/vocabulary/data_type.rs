//! Catalogue of data types
//!
//!     Dotted identifiers grouped by subject: `access.*` for access logs, `billing.*`,
//!     `contact.*`, `device.*`, `location.*`, `user.*` and so on. The display name is the
//!     short label shown next to each collected element.

vocabulary! {
    /// Type of an individual data element collected from the user
    pub enum DataType in "data type" {
        /// The version of the application that has been used by the user for their access
        AccessAppVersion => "access.app.version", "Version of application used for access";
        /// The date and time of each individual access by the user (e.g. as stored in the access logs)
        AccessDatetime => "access.datetime", "Date and time for each access";
        /// The date of each individual access by the user (e.g. as stored in the access logs)
        AccessDatetimeDate => "access.datetime.date", "Date for each access";
        /// The time of each individual access by the user (e.g. as stored in the access logs)
        AccessDatetimeTime => "access.datetime.time", "Time for each access";
        /// Whether the device used for the access supports file uploads
        AccessDeviceFeaturesFileUpload => "access.device.features.file_upload", "Availability of file uploads";
        /// The date and/or time of the first individual access by the user
        AccessFirstTime => "access.first.time", "Time of first access";
        /// The HTTP request method of each individual access by the user (e.g. as stored in the access logs)
        AccessHttpMethod => "access.http.method", "HTTP request method for each access";
        /// The HTTP status code of each individual access by the user (e.g. as stored in the access logs)
        AccessHttpStatus => "access.http.status", "HTTP status code for each access";
        /// The Internet Protocol (IP) address of the user for each individual access (e.g. as stored in the access logs)
        AccessIpAddress => "access.ip.address", "Internet Protocol (IP) address for each access";
        /// The Internet Protocol (IP) address of the user for each individual access with its precision reduced to 25% (e.g. as stored in the access logs)
        AccessIpAddress25Percent => "access.ip.address.25_percent", "Internet Protocol (IP) address for each access (reduced to 25%% precision)";
        /// The Internet Protocol (IP) address of the user for each individual access with its precision reduced to 50% (e.g. as stored in the access logs)
        AccessIpAddress50Percent => "access.ip.address.50_percent", "Internet Protocol (IP) address for each access (reduced to 50%% precision)";
        /// The Internet Protocol (IP) address of the user for each individual access with its precision reduced to 75% (e.g. as stored in the access logs)
        AccessIpAddress75Percent => "access.ip.address.75_percent", "Internet Protocol (IP) address for each access (reduced to 75%% precision)";
        /// The referring site (or individual page) of the user for each individual access (e.g. as stored in the access logs)
        AccessReferer => "access.referer", "Referring site (URL) for each access";
        /// The amount of data transferred (usually the number of bytes sent or received) for each individual access by the user (e.g. as stored in the access logs)
        AccessSize => "access.size", "Amount of data transferred for each access";
        /// The requested URL for each individual access by the user (e.g. as stored in the access logs)
        AccessUrl => "access.url", "Requested page (URL) for each access";
        /// The user-agent string of the user for each individual access (e.g. as stored in the access logs)
        AccessUseragentString => "access.useragent.string", "User-agent string for each access";
        /// The date and/or time when billing has been cancelled
        BillingCancellationTime => "billing.cancellation.time", "Time of cancellation";
        /// The date and/or time when billing has ended or will end
        BillingEndTime => "billing.end.time", "End of billing";
        /// Whether a free trial is currently active
        BillingFreeTrial => "billing.free_trial", "Usage of free trial";
        /// An identification number with an external payment service provider
        BillingIdPaymentServiceProvider => "billing.id.payment_service_provider", "Identification number with external payment service provider";
        /// The date and/or time when billing options have most recently been modified
        BillingModificationTime => "billing.modification.time", "Time of last modification to billing options";
        /// The date and/or time of the next (scheduled) payment
        BillingNextPaymentTime => "billing.next_payment.time", "Time of next payment";
        /// Whether there are payments past due at the moment
        BillingPastDue => "billing.past_due", "Payments past due";
        /// The plan or package that has been chosen and is used for billing
        BillingPlan => "billing.plan", "Plan or package for billing";
        /// The date and/or time when billing has started
        BillingStartTime => "billing.start.time", "Start of billing";
        /// The physical address of one of the user's contacts
        ContactAddress => "contact.address", "Address of contact";
        /// The country as part of the physical address of one of the user's contacts
        ContactAddressCountry => "contact.address.country", "Country of contact";
        /// The locality (usually the city) as part of the physical address of one of the user's contacts
        ContactAddressLocality => "contact.address.locality", "City of contact";
        /// The location of a building or apartment (usually including the street, the street or house number, and potentially the apartment number) within a locality as part of the physical address of one of the user's contacts
        ContactAddressPlace => "contact.address.place", "Street name and house number of contact";
        /// The postal code as part of the physical address of one of the user's contacts
        ContactAddressPostalCode => "contact.address.postal_code", "Postal code of contact";
        /// The region (often the state or province) as part of the physical address of one of the user's contacts
        ContactAddressRegion => "contact.address.region", "State of contact";
        /// The complete date of birth of one of the user's contacts
        ContactBirthDate => "contact.birth.date", "Date of birth of contact";
        /// The month and day of the date of birth of one of the user's contacts
        ContactBirthDateMonthDay => "contact.birth.date.md", "Month and day of birth of contact";
        /// The year of the date of birth of one of the user's contacts
        ContactBirthDateYear => "contact.birth.date.y", "Year of birth of contact";
        /// The year and month of the date of birth of one of the user's contacts
        ContactBirthDateYearMonth => "contact.birth.date.ym", "Year and month of birth of contact";
        /// The department of one of the user's contacts within their company
        ContactCompanyDepartment => "contact.company.department", "Department of contact within company";
        /// The name of the company of one of the user's contacts
        ContactCompanyName => "contact.company.name", "Company name of contact";
        /// The date and/or time the contact has been created
        ContactCreationTime => "contact.creation.time", "Time of creation of contact";
        /// The email address of one of the user's contacts
        ContactEmail => "contact.email", "Email address of contact";
        /// The fax number of one of the user's contacts
        ContactFax => "contact.fax", "Fax number of contact";
        /// The identifying number or ID (e.g. IBAN) of the bank account of one of the user's contacts
        ContactFinancialBankAccountId => "contact.financial.bank.account.id", "Bank account number of contact";
        /// The identifying number or ID (e.g. BIC) of the bank or financial institute of one of the user's contacts
        ContactFinancialBankId => "contact.financial.bank.id", "Bank identifier of contact";
        /// The name of the bank or financial institute of one of the user's contacts
        ContactFinancialBankName => "contact.financial.bank.name", "Bank name of contact";
        /// The gender of one of the user's contacts
        ContactGender => "contact.gender", "Gender of contact";
        /// The value-added tax (VAT) identification number (IN) (VATIN) of a contact in the European Union
        ContactIdentifiersEuVatIn => "contact.identifiers.eu.vat.in", "VAT ID (European Union) of contact";
        /// The date and/or time the contact has most recently been modified
        ContactModificationTime => "contact.modification.time", "Time of last modification to contact";
        /// The name of one of the user's contacts
        ContactName => "contact.name", "Name of contact";
        /// The alias, nickname or username of one of the user's contacts
        ContactNameAlias => "contact.name.alias", "Alias or username of contact";
        /// The family name of one of the user's contacts
        ContactNameFamily => "contact.name.family", "Family name of contact";
        /// The given name of one of the user's contacts
        ContactNameGiven => "contact.name.given", "Given name of contact";
        /// The date and/or time of the contact's original message
        ContactOriginalMessageTime => "contact.original_message.time", "Time of original message of contact";
        /// The phone number of one of the user's contacts
        ContactPhone => "contact.phone", "Phone number of contact";
        /// The landline phone number of one of the user's contacts
        ContactPhoneHome => "contact.phone.home", "Residential phone number of contact";
        /// The mobile phone number of one of the user's contacts
        ContactPhoneMobile => "contact.phone.mobile", "Mobile phone number of contact";
        /// The contact's reference as a number or as text
        ContactReference => "contact.reference", "Reference of contact";
        /// The URL of the website of one of the user's contacts
        ContactWebsiteUrl => "contact.website.url", "Website (URL) of contact";
        /// The price, cost or other monetary amount of one of the user's contracts per billing cycle
        ContractBillingAmount => "contract.billing.amount", "Billing amount of contract";
        /// The billing cycle of one of the user's contracts
        ContractBillingCycle => "contract.billing.cycle", "Billing cycle of contract";
        /// The cancellation period of one of the user's contracts
        ContractCancellationPeriod => "contract.cancellation.period", "Cancellation period of contract";
        /// The date and/or time the contract has been cancelled
        ContractCancellationTime => "contract.cancellation.time", "Time of cancellation of contract";
        /// The date and/or time the contract has been created
        ContractCreationTime => "contract.creation.time", "Time of creation of contract";
        /// The date and/or time the contract has most recently been modified
        ContractModificationTime => "contract.modification.time", "Time of last modification to contract";
        /// Any custom notes pertaining to one of the user's contracts
        ContractNotes => "contract.notes", "Custom notes on contract";
        /// The contractual partner or (second) contracting party of one of the user's contracts
        ContractPartner => "contract.partner", "Contractual partner";
        /// The end date of a period of one of the user's contracts
        ContractPeriodEnd => "contract.period.end", "End of contract";
        /// The term of extension on (automatic) renewal of one of the user's contracts
        ContractPeriodExtension => "contract.period.extension", "Contract duration after renewal";
        /// The start date of a period of one of the user's contracts
        ContractPeriodStart => "contract.period.start", "Start of contract";
        /// The customer number
        CustomerNumber => "customer.number", "Customer number";
        /// The brand and version of the web browser on one of the user's devices
        DeviceBrowser => "device.browser", "Brand and version of web browser on device";
        /// The brand of the web browser on one of the user's devices
        DeviceBrowserBrand => "device.browser.brand", "Brand of web browser on device";
        /// The version of the web browser on one of the user's devices
        DeviceBrowserVersion => "device.browser.version", "Version of web browser on device";
        /// The primary time zone that one of the user's devices is configured for
        DeviceDatetimeTimeZone => "device.datetime.time_zone", "Time zone of device";
        /// A unique identifier of one of the user's devices that remains constant for the lifetime of the device (e.g. "Android ID")
        DeviceIdPermanent => "device.id.permanent", "Permanent identifier of device";
        /// A unique identifier of one of the user's devices that can be reset by the user at any time (e.g. "Android Advertising ID" or "Apple Advertising Identifier")
        DeviceIdResettable => "device.id.resettable", "Resettable identifier of device";
        /// The preferred language that one of the user's devices is configured for
        DeviceLanguage => "device.language", "Language of device";
        /// The manufacturer of one of the user's devices
        DeviceManufacturer => "device.manufacturer", "Manufacturer of device";
        /// The model name of one of the user's devices
        DeviceModel => "device.model", "Model name of device";
        /// The brand and version of the operating system (OS) on one of the user's devices
        DeviceOs => "device.os", "Brand and version of operating system on device";
        /// The brand of the operating system (OS) on one of the user's devices
        DeviceOsBrand => "device.os.brand", "Brand of operating system on device";
        /// The version of the operating system (OS) on one of the user's devices
        DeviceOsVersion => "device.os.version", "Version of operating system on device";
        /// The hidden list of additional (concealed) recipients of an email other than the primary recipient(s)
        EmailBcc => "email.bcc", "Email addresses in BCC line of email";
        /// The message body or actual text of an email
        EmailBody => "email.body", "Message text of email";
        /// The list of additional recipients of an email other than the primary recipient(s)
        EmailCc => "email.cc", "Email addresses in CC line of email";
        /// The date and time (written) of an email
        EmailDatetime => "email.datetime", "Date and time of email";
        /// The date (written) of an email
        EmailDatetimeDate => "email.datetime.date", "Date of email";
        /// The time (written) of an email
        EmailDatetimeTime => "email.datetime.time", "Time of email";
        /// The email address of the sender of an email
        EmailFrom => "email.from", "Email address of sender of email";
        /// The email address of the sender of an email designated to receive replies
        EmailReplyTo => "email.reply_to", "Email address of designated receiver of replies to email";
        /// The email address of the sender of an email designated to receive undeliverable messages
        EmailReturnPath => "email.return_path", "Email address of designated receiver of information on undeliverable email";
        /// The subject of an email
        EmailSubject => "email.subject", "Subject of email";
        /// The email address of the recipient(s) of an email
        EmailTo => "email.to", "Email addresses of recipients of email";
        /// The number of the invoice
        InvoiceNumber => "invoice.number", "Invoice number";
        /// The message body or actual text of a letter
        LetterBody => "letter.body", "Message text of letter";
        /// The note about additional recipients of a letter
        LetterCc => "letter.cc", "Notes on additional recipients of letter";
        /// The date and/or time the letter has been created
        LetterCreationTime => "letter.creation.time", "Time of creation of letter";
        /// The date and time (written) of a letter
        LetterDatetime => "letter.datetime", "Date and time of letter";
        /// The date (written) of a letter
        LetterDatetimeDate => "letter.datetime.date", "Date of letter";
        /// The time (written) of a letter
        LetterDatetimeTime => "letter.datetime.time", "Time of letter";
        /// The list of enclosures of a letter
        LetterEnclosures => "letter.enclosures", "List of enclosures to letter";
        /// The headline or title of a letter
        LetterHeadline => "letter.headline", "Headline of letter";
        /// Whether the letter has been the first one
        LetterIsFirst => "letter.is_first", "Classification of letter as first letter";
        /// Whether the letter is for personal matters or for business matters
        LetterMatterPersonalOrBusiness => "letter.matter.personal_or_business", "Classification of letter as personal or as relating to business";
        /// The date and/or time the letter has most recently been modified
        LetterModificationTime => "letter.modification.time", "Time of last modification to letter";
        /// The postscript ("PS") to a letter
        LetterPs => "letter.ps", "Postscript of letter";
        /// The salutation of the letter
        LetterSalutation => "letter.salutation", "Salutation of letter";
        /// The subject of a letter
        LetterSubject => "letter.subject", "Subject of letter";
        /// The valediction of the letter
        LetterValediction => "letter.valediction", "Valediction of letter";
        /// The access privileges granted to the user
        UserAccessPrivileges => "user.access.privileges", "Access privileges";
        /// The physical address of the user
        UserAddress => "user.address", "Address";
        /// The country as part of the physical address of the user
        UserAddressCountry => "user.address.country", "Country";
        /// The locality (usually the city) as part of the physical address of the user
        UserAddressLocality => "user.address.locality", "City";
        /// The location of a building or apartment (usually including the street, the street or house number, and potentially the apartment number) within a locality as part of the physical address of the user
        UserAddressPlace => "user.address.place", "Street name and house number";
        /// The postal code as part of the physical address of the user
        UserAddressPostalCode => "user.address.postal_code", "Postal code";
        /// The region (often the state or province) as part of the physical address of the user
        UserAddressRegion => "user.address.region", "State";
        /// The complete date of birth of the user
        UserBirthDate => "user.birth.date", "Date of birth";
        /// The month and day of the date of birth of the user
        UserBirthDateMonthDay => "user.birth.date.md", "Month and day of birth";
        /// The year of the date of birth of the user
        UserBirthDateYear => "user.birth.date.y", "Year of birth";
        /// The year and month of the date of birth of the user
        UserBirthDateYearMonth => "user.birth.date.ym", "Year and month of birth";
        /// The place of birth of the user
        UserBirthPlace => "user.birth.place", "Place of birth";
        /// The blood group or blood type of the user
        UserBloodGroup => "user.blood.group", "Blood group";
        /// The entry of the user's company in the commercial register
        UserCompanyCommercialRegisterEntry => "user.company.commercial_register.entry", "Entry of company in commercial register";
        /// The department of the user within their company
        UserCompanyDepartment => "user.company.department", "Department within company";
        /// The members of the executive board of the user's company
        UserCompanyExecutiveBoardMembers => "user.company.executive_board.members", "Members of executive board of company";
        /// The logo of the company of the user
        UserCompanyLogo => "user.company.logo", "Logo of company";
        /// The date and/or time the logo of the user's company has been created
        UserCompanyLogoCreationTime => "user.company.logo.creation.time", "Time of creation of logo of company";
        /// The label for the logo of the user's company
        UserCompanyLogoLabel => "user.company.logo.label", "Label for logo of company";
        /// The date and/or time the logo of the user's company has most recently been modified
        UserCompanyLogoModificationTime => "user.company.logo.modification.time", "Time of last modification to logo of company";
        /// The members of the management of the user's company
        UserCompanyManagementMembers => "user.company.management.members", "Members of management of company";
        /// The name of the company of the user
        UserCompanyName => "user.company.name", "Company name";
        /// The members of the supervisory board of the user's company
        UserCompanySupervisoryBoardMembers => "user.company.supervisory_board.members", "Members of supervisory board of company";
        /// The user's country
        UserCountry => "user.country", "Country";
        /// The email address of the user
        UserEmail => "user.email", "Email address";
        /// Whether the user's email address has been verified
        UserEmailVerified => "user.email.verified", "Verification status of email address";
        /// The fax number of the user
        UserFax => "user.fax", "Fax number";
        /// The identifying number or ID (e.g. IBAN) of the bank account of the user
        UserFinancialBankAccountId => "user.financial.bank.account.id", "Bank account number";
        /// The identifying number or ID (e.g. BIC) of the bank or financial institute of the user
        UserFinancialBankId => "user.financial.bank.id", "Bank identifier";
        /// The name of the bank or financial institute of the user
        UserFinancialBankName => "user.financial.bank.name", "Bank name";
        /// The brand name (e.g. MasterCard or VISA) of a credit card of the user
        UserFinancialCreditCardBrand => "user.financial.credit_card.brand", "Brand name of credit card";
        /// The verification code (CVC), verification value (CVV), security code (CSC) or other verification number of a credit card of the user
        UserFinancialCreditCardCvc => "user.financial.credit_card.cvc", "Verification code (e.g. CVC, CVV, CSC) of credit card";
        /// The expiration date of a credit card of the user
        UserFinancialCreditCardExpiration => "user.financial.credit_card.expiration", "Expiration date of credit card";
        /// The number of a credit card of the user
        UserFinancialCreditCardNumber => "user.financial.credit_card.number", "Card number of credit card";
        /// The gender of the user
        UserGender => "user.gender", "Gender";
        /// The geographical coordinates of the user
        UserGeoCoordinates => "user.geo.coordinates", "Geographical coordinates";
        /// The height of the user
        UserHeight => "user.height", "Height";
        /// The "steuerliche Identifikationsnummer" ("Steuer-IdNr.") of the user in Germany
        UserIdentifiersDeuStIdnr => "user.identifiers.deu.st_idnr", "Steuerliche Identifikationsnummer (Steuer-IdNr.) (Germany)";
        /// The "Steuernummer" or "Steuer-Identnummer" ("St.-Nr.") of the user in Germany
        UserIdentifiersDeuStNr => "user.identifiers.deu.st_nr", "Steuernummer (St.-Nr) (Germany)";
        /// The value-added tax (VAT) identification number (IN) (VATIN) of the user in the European Union
        UserIdentifiersEuVatIn => "user.identifiers.eu.vat.in", "VAT ID (European Union)";
        /// The "Social Security number" (SSN) of the user in the United States of America
        UserIdentifiersUsaSsn => "user.identifiers.usa.ssn", "Social Security number (SSN) (United States of America)";
        /// The Internet Protocol (IP) address of the user
        UserIpAddress => "user.ip.address", "Internet Protocol (IP) address";
        /// The Internet Protocol (IP) address of the user with its precision reduced to 25%
        UserIpAddress25Percent => "user.ip.address.25_percent", "Internet Protocol (IP) address (reduced to 25%% precision)";
        /// The Internet Protocol (IP) address of the user with its precision reduced to 50%
        UserIpAddress50Percent => "user.ip.address.50_percent", "Internet Protocol (IP) address (reduced to 50%% precision)";
        /// The Internet Protocol (IP) address of the user with its precision reduced to 75%
        UserIpAddress75Percent => "user.ip.address.75_percent", "Internet Protocol (IP) address (reduced to 75%% precision)";
        /// The date and time of the (last) login of the user
        UserLoginDatetime => "user.login.datetime", "Date and time of login";
        /// The date of the (last) login of the user
        UserLoginDatetimeDate => "user.login.datetime.date", "Date of login";
        /// The time of the (last) login of the user
        UserLoginDatetimeTime => "user.login.datetime.time", "Time of login";
        /// The name of the user
        UserName => "user.name", "Name";
        /// The alias, nickname or username of the user
        UserNameAlias => "user.name.alias", "Alias or username";
        /// The family name of the user
        UserNameFamily => "user.name.family", "Family name";
        /// The given name of the user
        UserNameGiven => "user.name.given", "Given name";
        /// Any custom notes saved by the user
        UserNotes => "user.notes", "Custom notes";
        /// The occupation of the user
        UserOccupation => "user.occupation", "Occupation";
        /// The current occupation of the user
        UserOccupationCurrent => "user.occupation.current", "Current occupation";
        /// The preferred occupation of the user
        UserOccupationPreferred => "user.occupation.preferred", "Preferred occupation";
        /// The password of the user as cleartext
        UserPasswordCleartext => "user.password.cleartext", "Password (cleartext)";
        /// The password of the user hashed using a well-known hashing algorithm that is accepted as such in the industry
        UserPasswordHashed => "user.password.hashed", "Password (hash)";
        /// The password of the user hashed using an algorithm and configuration (cf. number of rounds) currently regarded as strong in the industry (e.g. Argon2, bcrypt, scrypt)
        UserPasswordHashedStrong => "user.password.hashed.strong", "Password (strong hash)";
        /// Whether password resets are permitted for the user
        UserPasswordResettable => "user.password.resettable", "Availability of password reset";
        /// The phone number of the user
        UserPhone => "user.phone", "Phone number";
        /// The landline phone number of the user
        UserPhoneHome => "user.phone.home", "Residential phone number";
        /// The mobile phone number of the user
        UserPhoneMobile => "user.phone.mobile", "Mobile phone number";
        /// The primary picture of the user (e.g. portrait or profile picture)
        UserPicture => "user.picture", "Picture";
        /// The user's reference as a number or as text
        UserReference => "user.reference", "Reference";
        /// The date and time of the registration of the user
        UserRegistrationDatetime => "user.registration.datetime", "Date and time of registration";
        /// The date of the registration of the user
        UserRegistrationDatetimeDate => "user.registration.datetime.date", "Date of registration";
        /// The time of the registration of the user
        UserRegistrationDatetimeTime => "user.registration.datetime.time", "Time of registration";
        /// The signature of the user
        UserSignature => "user.signature", "Signature";
        /// The date and/or time the user's signature has been created
        UserSignatureCreationTime => "user.signature.creation.time", "Time of creation of signature";
        /// The signature of the user digitally drawn on their device
        UserSignatureDrawn => "user.signature.drawn", "Digitally drawn signature";
        /// The handwritten signature of the user
        UserSignatureHandwritten => "user.signature.handwritten", "Handwritten signature";
        /// The label for the user's signature
        UserSignatureLabel => "user.signature.label", "Label for signature";
        /// The date and/or time the user's signature has most recently been modified
        UserSignatureModificationTime => "user.signature.modification.time", "Time of last modification to signature";
        /// The URL of the website of the user
        UserWebsiteUrl => "user.website.url", "Website (URL)";
        /// The weight of the user
        UserWeight => "user.weight", "Body weight";
        /// The color of one of the user's vehicles
        VehicleColor => "vehicle.color", "Color of vehicle";
        /// The place of construction of one of the user's vehicles
        VehicleConstructionPlace => "vehicle.construction.place", "Place of construction of vehicle";
        /// The year of construction of one of the user's vehicles
        VehicleConstructionYear => "vehicle.construction.date.y", "Year of construction of vehicle";
        /// The make of one of the user's vehicles
        VehicleMake => "vehicle.make", "Make of vehicle";
        /// The model name of one of the user's vehicles
        VehicleModel => "vehicle.model", "Model name of vehicle";
        /// Any custom notes pertaining to one of the user's vehicles
        VehicleNotes => "vehicle.notes", "Custom notes on vehicle";
        /// The registration plate number of one of the user's vehicles
        VehicleRegistrationPlateNumber => "vehicle.registration.plate.number", "Registration plate number of vehicle";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("access.ip.address", "Internet Protocol (IP) address for each access")]
    #[case("access.datetime", "Date and time for each access")]
    #[case("access.app.version", "Version of application used for access")]
    fn test_display_names(#[case] id: &str, #[case] name: &str) {
        assert_eq!(display_name(id).unwrap(), name);
    }

    #[test]
    fn test_catalogue_is_total() {
        assert!(DataType::ALL.len() > 150);
        for data_type in DataType::ALL {
            assert!(!data_type.display_name().is_empty());
            assert_eq!(data_type.identifier().parse::<DataType>().unwrap(), *data_type);
        }
    }

    #[test]
    fn test_percent_signs_are_escaped_for_the_translator() {
        assert!(DataType::AccessIpAddress25Percent
            .display_name()
            .contains("25%% precision"));
    }

    #[test]
    fn test_unknown_type() {
        assert!(display_name("access.mood").is_err());
    }
}
