//! German string tables
//!
//!     Two tables: the base table holds every string that doesn't address the reader, the
//!     formal table holds the sentences that do, written with the polite "Sie". A lookup
//!     checks the formal table first.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static BASE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BASE_ROWS.iter().copied().collect());

static FORMAL: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| FORMAL_ROWS.iter().copied().collect());

pub(crate) fn lookup(source: &str) -> Option<&'static str> {
    FORMAL.get(source).or_else(|| BASE.get(source)).copied()
}

const BASE_ROWS: &[(&str, &str)] = &[
    ("Access privileges", "Zugriffsrechte"),
    ("Address of contact", "Adresse des Kontakts"),
    ("Address", "Adresse"),
    ("Alias or username of contact", "Pseudonym oder Benutzername des Kontakts"),
    ("Alias or username", "Pseudonym oder Benutzername"),
    ("Amount of data transferred for each access", "Übertragene Datenmenge für jeden Zugriff"),
    ("Android app (available from “Google Play”, a digital distribution platform operated by Google Inc.)", "Android-App (verfügbar über „Google Play“, eine digitale Vertriebsplattform, betrieben von Google Inc.)"),
    ("archiving or research", "Archivierung oder Forschung"),
    ("As such, cookies and the related technologies are essential for the operation of our services.", "In diesem Sinne sind Cookies und die ähnlichen Technologien unerlässlich für den Betrieb unserer Dienste."),
    ("Availability of file uploads", "Verfügbarkeit von Dateiuploads"),
    ("Availability of password reset", "Verfügbarkeit des Passwort-Zurücksetzens"),
    ("Bank account number of contact", "Nummer des Bankkontos des Kontakts"),
    ("Bank account number", "Nummer des Bankkontos"),
    ("Bank identifier of contact", "Bezeichner der Bank des Kontakts"),
    ("Bank identifier", "Bezeichner der Bank"),
    ("Bank name of contact", "Name der Bank des Kontakts"),
    ("Bank name", "Name der Bank"),
    ("Billing amount of contract", "Rechnungsbetrag des Vertrages"),
    ("Billing cycle of contract", "Abrechnungszeitraum des Vertrages"),
    ("Blood group", "Blutgruppe"),
    ("Body weight", "Körpergewicht"),
    ("Brand and version of operating system on device", "Marke und Version des Betriebssystems auf dem Gerät"),
    ("Brand and version of web browser on device", "Marke und Version des Webbrowsers auf dem Gerät"),
    ("Brand name of credit card", "Marke der Kreditkarte"),
    ("Brand of operating system on device", "Marke des Betriebssystems auf dem Gerät"),
    ("Brand of web browser on device", "Marke des Webbrowsers auf dem Gerät"),
    ("Cancellation period of contract", "Kündigungsfrist des Vertrages"),
    ("Card number of credit card", "Kartennummer der Kreditkarte"),
    ("Changes to this privacy policy", "Änderungen an dieser Datenschutzerklärung"),
    ("Children’s Online Privacy Protection", "Schutz der Privatsphäre von Kindern"),
    ("City of contact", "Stadt des Kontakts"),
    ("City", "Stadt"),
    ("Classification of letter as first letter", "Einstufung des Briefes als ersten Brief"),
    ("Classification of letter as personal or as relating to business", "Einstufung des Briefes als persönlich oder als geschäftlich"),
    ("Color of vehicle", "Farbe des Fahrzeugs"),
    ("Company name of contact", "Name des Unternehmens des Kontakts"),
    ("Company name", "Name des Unternehmens"),
    ("Condition for the processing of special categories of personal data:", "Bedingung zur Verarbeitung besonderer Kategorien persönlicher Daten:"),
    ("consent", "Einwilligung"),
    ("Contact information of the controller", "Kontaktdaten des Verantwortlichen"),
    ("Contract duration after renewal", "Vertragsdauer nach Verlängerung"),
    ("contract", "Vertrag"),
    ("Contractual partner", "Vertragspartner"),
    ("Cookies are minimal text files that contain small amounts of data.", "Cookies sind kleine Textdateien, die geringe Mengen an Daten beinhalten."),
    ("Cookies", "Cookies"),
    ("Country of contact", "Land des Kontakts"),
    ("Country", "Land"),
    ("Current occupation", "Aktueller Beruf"),
    ("Customer number", "Kundennummer"),
    ("Custom notes on contract", "Benutzerdefinierte Notizen zum Vertrag"),
    ("Custom notes on vehicle", "Benutzerdefinierte Notizen zum Fahrzeug"),
    ("Custom notes", "Benutzerdefinierte Notizen"),
    ("Date and time for each access", "Datum und Uhrzeit für jeden Zugriff"),
    ("Date and time of email", "Datum und Uhrzeit der E-Mail"),
    ("Date and time of letter", "Datum und Uhrzeit des Briefes"),
    ("Date and time of login", "Datum und Uhrzeit des Logins"),
    ("Date and time of registration", "Datum und Uhrzeit der Registrierung"),
    ("Date for each access", "Datum für jeden Zugriff"),
    ("Date of birth of contact", "Geburtsdatum des Kontakts"),
    ("Date of birth", "Geburtsdatum"),
    ("Date of email", "Datum der E-Mail"),
    ("Date of expiration", "Datum des Außerkrafttretens"),
    ("Date of letter", "Datum des Briefes"),
    ("Date of login", "Datum des Logins"),
    ("Date of publication", "Datum der Veröffentlichung"),
    ("Date of registration", "Datum der Registrierung"),
    ("Department of contact within company", "Abteilung des Kontakts innerhalb des Unternehmens"),
    ("Department within company", "Abteilung innerhalb des Unternehmens"),
    ("Digitally drawn signature", "Digital gezeichnete Unterschrift"),
    ("Effective date", "Datum des Inkrafttretens"),
    ("Email addresses in BCC line of email", "E-Mail-Adressen in BCC-Zeile der E-Mail"),
    ("Email addresses in CC line of email", "E-Mail-Adressen in CC-Zeile der E-Mail"),
    ("Email addresses of recipients of email", "E-Mail-Adressen der Empfänger der E-Mail"),
    ("Email address of contact", "E-Mail-Adresse des Kontakts"),
    ("Email address of designated receiver of information on undeliverable email", "E-Mail-Adresse des vorgesehenen Empfängers von Informationen über unzustellbare E-Mails"),
    ("Email address of designated receiver of replies to email", "E-Mail-Adresse des vorgesehenen Empfängers von Antworten auf die E-Mail"),
    ("Email address of sender of email", "E-Mail-Adresse des Absenders der E-Mail"),
    ("Email address", "E-Mail-Adresse"),
    ("Email communication", "E-Mail-Kommunikation"),
    ("employment and social security", "Arbeit und soziale Sicherheit"),
    ("End of billing", "Ende der Abrechnung"),
    ("End of contract", "Vertragsende"),
    ("Entry of company in commercial register", "Eintrag des Unternehmens im Handelsregister"),
    ("Expiration date of credit card", "Ablaufdatum der Kreditkarte"),
    ("explicit consent", "ausdrückliche Einwilligung"),
    ("Family name of contact", "Nachname des Kontakts"),
    ("Family name", "Nachname"),
    ("Fax number of contact", "Fax-Nummer des Kontakts"),
    ("Fax number", "Fax-Nummer"),
    ("foundation, association or non-profit", "Stiftung, Vereinigung oder Organisation ohne Gewinnerzielungsabsicht"),
    ("Functions performed by them on our behalf may include payment processing, network data transmission, fraud prevention, customer support management and similar services.", "Funktionen, die diese Parteien für uns und in unserem Auftrag ausführen, können die Zahlungsabwicklung, Datenübertragung im Netzwerk, Betrugsprävention, Verwaltung der Kundenbetreuung und ähnliche Dienstleistungen umfassen."),
    ("Gender of contact", "Geschlecht des Kontakts"),
    ("Gender", "Geschlecht"),
    ("General", "Allgemein"),
    ("Geographical coordinates", "Geographische Koordinaten"),
    ("Given name of contact", "Vorname des Kontakts"),
    ("Given name", "Vorname"),
    ("Handwritten signature", "Handschriftliche Unterschrift"),
    ("Hardware or software failure as well as other factors may compromise the security of user information, as is the case with all other providers of digital services.", "Fehler in Hardware oder Software sowie andere Faktoren können die Sicherheit der Daten von Nutzern beeinträchtigen, so wie es auch bei allen anderen Anbietern von digitalen Dienstleistungen der Fall ist."),
    ("Headline of letter", "Überschrift des Briefes"),
    ("health and social care", "Gesundheit und Soziales"),
    ("Height", "Körpergröße"),
    ("HTTP request method for each access", "HTTP-Anfragemethode für jeden Zugriff"),
    ("HTTP status code for each access", "HTTP-Statuscode für jeden Zugriff"),
    ("Identification number with external payment service provider", "Kennnummer bei externem Zahlungsdienstleister"),
    ("In any case, we will provide data only to the extent necessary to satisfy the request, and, whenever possible and legally permitted, we will make a reasonable effort to notify affected users of any such disclosure.", "In jedem Fall werden wir Daten nur in dem Maße zur Verfügung stellen, das nötig ist, um der Aufforderung zu genügen, und, wann immer es möglich und gesetzlich zulässig ist, werden wir uns in angemessener Weise bemühen, betroffene Nutzer über diese Offenlegung zu benachrichtigen."),
    ("Information we collect and why we collect it", "Informationen, die wir erfassen, und warum wir sie erfassen"),
    ("In particular, all connections to and from our services are encrypted using Secure Sockets Layer (SSL) and Transport Layer Security (TLS) technologies.", "Insbesondere sind alle Verbindungen zu und von unseren Diensten durch die Technologien „Secure Sockets Layer“ (SSL) und „Transport Layer Security“ (TLS) verschlüsselt."),
    ("International data transfers", "Internationale Datenübermittlungen"),
    ("Internet Protocol (IP) address for each access (reduced to 25%% precision)", "Internetprotokoll-Adresse (IP-Adresse) für jeden Zugriff (reduziert auf 25%% Genauigkeit)"),
    ("Internet Protocol (IP) address for each access (reduced to 50%% precision)", "Internetprotokoll-Adresse (IP-Adresse) für jeden Zugriff (reduziert auf 50%% Genauigkeit)"),
    ("Internet Protocol (IP) address for each access (reduced to 75%% precision)", "Internetprotokoll-Adresse (IP-Adresse) für jeden Zugriff (reduziert auf 75%% Genauigkeit)"),
    ("Internet Protocol (IP) address for each access", "Internetprotokoll-Adresse (IP-Adresse) für jeden Zugriff"),
    ("Internet Protocol (IP) address (reduced to 25%% precision)", "Internetprotokoll-Adresse (IP-Adresse) (reduziert auf 25%% Genauigkeit)"),
    ("Internet Protocol (IP) address (reduced to 50%% precision)", "Internetprotokoll-Adresse (IP-Adresse) (reduziert auf 50%% Genauigkeit)"),
    ("Internet Protocol (IP) address (reduced to 75%% precision)", "Internetprotokoll-Adresse (IP-Adresse) (reduziert auf 75%% Genauigkeit)"),
    ("Internet Protocol (IP) address", "Internetprotokoll-Adresse (IP-Adresse)"),
    ("Invoice number", "Rechnungsnummer"),
    ("iOS app (available from the “App Store”, a digital distribution platform operated by Apple Inc.)", "iOS-App (verfügbar über den „App Store“, eine digitale Vertriebsplattform, betrieben von Apple Inc.)"),
    ("Label for logo of company", "Bezeichnung für Logo des Unternehmens"),
    ("Label for signature", "Bezeichnung für Unterschrift"),
    ("Language of device", "Sprache des Geräts"),
    ("Latest version", "Aktuellste Version"),
    ("Lawful basis:", "Rechtsgrundlage:"),
    ("Laws in the jurisdictions that we operate in may obligate us to disclose certain personal information or other information that we collect about our users to local law enforcement authorities.", "Gesetze in den Rechtssystemen und Zuständigkeitsbereichen, in denen wir unsere Dienste betreiben, können uns dazu verpflichten, bestimmte persönliche Informationen oder andere Informationen, die wir über unsere Nutzer erfassen, gegenüber lokalen Strafverfolgungsbehörden offenzulegen."),
    ("legal claims or judicial capacity", "Rechtsansprüche oder justizielle Tätigkeit"),
    ("legal obligation", "rechtliche Verpflichtung"),
    ("legitimate interests", "berechtigte Interessen"),
    ("Links to external websites, applications and products", "Links zu externen Webseiten, Anwendungen und Produkten"),
    ("List of enclosures to letter", "Liste der Anlagen zum Brief"),
    ("Logo of company", "Logo des Unternehmens"),
    ("Make of vehicle", "Marke des Fahrzeugs"),
    ("Mandatory disclosure", "Offenlegungspflichten"),
    ("Manufacturer of device", "Hersteller des Geräts"),
    ("Maximum retention time: %s", "Maximale Aufbewahrungszeit: %s"),
    ("Members of executive board of company", "Mitglieder des Vorstands des Unternehmens"),
    ("Members of management of company", "Mitglieder der Geschäftsführung des Unternehmens"),
    ("Members of supervisory board of company", "Mitglieder des Aufsichtsrats des Unternehmens"),
    ("Mergers and acquisitions", "Fusionen und Übernahmen"),
    ("Message text of email", "Nachrichtentext der E-Mail"),
    ("Message text of letter", "Nachrichtentext des Briefes"),
    ("Mobile phone number of contact", "Telefonnummer (mobil) des Kontakts"),
    ("Mobile phone number", "Telefonnummer (mobil)"),
    ("Model name of device", "Modellbezeichnung des Geräts"),
    ("Model name of vehicle", "Modellbezeichnung des Fahrzeugs"),
    ("Month and day of birth of contact", "Monat und Tag der Geburt des Kontakts"),
    ("Month and day of birth", "Monat und Tag der Geburt"),
    ("Name of contact", "Name des Kontakts"),
    ("Name", "Name"),
    ("None of our services are designed for, intended to attract, or directed towards children under the age of %d.", "Keine unserer Dienste sind für Kinder im Alter unter %d konzipiert, beabsichtigen deren Aufmerksamkeit zu gewinnen oder sind auf sie ausgerichtet."),
    ("no", "nein"),
    ("Notes on additional recipients of letter", "Hinweise auf zusätzliche Empfänger des Briefes"),
    ("Occupation", "Beruf"),
    ("Our full contact information can be found at:", "Unsere vollständigen Kontaktdaten sind zu finden unter:"),
    ("Our principles", "Unsere Prinzipien"),
    ("Password (cleartext)", "Passwort (Klartext)"),
    ("Password (hash)", "Passwort (Hash)"),
    ("Password (strong hash)", "Passwort (starker Hash)"),
    ("Payments past due", "Überfälligkeit von Zahlungen"),
    ("Permanent identifier of device", "Permanente Kennung des Geräts"),
    ("Phone number of contact", "Telefonnummer des Kontakts"),
    ("Phone number", "Telefonnummer"),
    ("Picture", "Bild"),
    ("Place of birth", "Geburtsort"),
    ("Place of construction of vehicle", "Herstellungsort des Fahrzeugs"),
    ("Plan or package for billing", "Tarif oder Paket für Abrechnung"),
    ("Postal code of contact", "Postleitzahl des Kontakts"),
    ("Postal code", "Postleitzahl"),
    ("Postscript of letter", "Postskriptum des Briefes"),
    ("Preferred occupation", "Bevorzugter Beruf"),
    ("Processing is carried out by a foundation, association or any other not-for-profit body with a political, philosophical, religious or trade union aim and on condition that the processing relates solely to the members or to former members of the body or to persons who have regular contact with it (EU, General Data Protection Regulation (GDPR), Article 9(2)(d)).", "Die Verarbeitung erfolgt durch eine politisch, weltanschaulich, religiös oder gewerkschaftlich ausgerichtete Stiftung, Vereinigung oder sonstige Organisation ohne Gewinnerzielungsabsicht und unter der Voraussetzung, dass sich die Verarbeitung ausschließlich auf die Mitglieder oder ehemalige Mitglieder der Organisation oder auf Personen, die regelmäßige Kontakte mit ihr unterhalten, bezieht (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(d))."),
    ("Processing is necessary for archiving purposes in the public interest, scientific or historical research purposes or statistical purposes (EU, General Data Protection Regulation (GDPR), Article 9(2)(j)).", "Die Verarbeitung ist für im öffentlichen Interesse liegende Archivzwecke, für wissenschaftliche oder historische Forschungszwecke oder für statistische Zwecke erforderlich (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(j))."),
    ("Processing is necessary for compliance with a legal obligation to which we are subject (EU, General Data Protection Regulation (GDPR), Article 6(1)(c)).", "Die Verarbeitung ist zur Erfüllung einer rechtlichen Verpflichtung erforderlich, der wir unterliegen (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 6(1)(c))."),
    ("Processing is necessary for reasons of public interest in the area of public health, such as protecting against serious cross-border threats to health or ensuring high standards of quality and safety of health care and of medicinal products or medical devices (EU, General Data Protection Regulation (GDPR), Article 9(2)(i)).", "Die Verarbeitung ist aus Gründen des öffentlichen Interesses im Bereich der öffentlichen Gesundheit, wie dem Schutz vor schwerwiegenden grenzüberschreitenden Gesundheitsgefahren oder zur Gewährleistung hoher Qualitäts- und Sicherheitsstandards bei der Gesundheitsversorgung und bei Arzneimitteln und Medizinprodukten erforderlich (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(i))."),
    ("Processing is necessary for reasons of substantial public interest (EU, General Data Protection Regulation (GDPR), Article 9(2)(g)).", "Die Verarbeitung ist aus Gründen eines erheblichen öffentlichen Interesses erforderlich (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(g))."),
    ("Processing is necessary for the establishment, exercise or defence of legal claims or for a court acting in its judicial capacity (EU, General Data Protection Regulation (GDPR), Article 9(2)(f)).", "Die Verarbeitung ist zur Geltendmachung, Ausübung oder Verteidigung von Rechtsansprüchen oder bei Handlungen der Gerichte im Rahmen ihrer justiziellen Tätigkeit erforderlich (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(f))."),
    ("Processing is necessary for the performance of a task carried out in the public interest or in the exercise of official authority vested in us (EU, General Data Protection Regulation (GDPR), Article 6(1)(e)).", "Die Verarbeitung ist für die Wahrnehmung einer Aufgabe erforderlich, die im öffentlichen Interesse liegt oder in Ausübung öffentlicher Gewalt erfolgt, die uns übertragen wurde (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 6(1)(e))."),
    ("Processing is necessary for the purposes of carrying out obligations and exercising specific rights in the field of employment and social security and social protection law (EU, General Data Protection Regulation (GDPR), Article 9(2)(b)).", "Die Verarbeitung ist erforderlich, damit aus dem Arbeitsrecht und dem Recht der sozialen Sicherheit und des Sozialschutzes erwachsende Rechte ausgeübt und diesbezüglichen Pflichten nachgekommen werden kann (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(b))."),
    ("Processing is necessary for the purposes of legitimate interests pursued by us or by a third party (EU, General Data Protection Regulation (GDPR), Article 6(1)(f)).", "Die Verarbeitung ist zur Wahrung unserer berechtigten Interessen oder derer eines Dritten erforderlich (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 6(1)(f))."),
    ("Processing is necessary for the purposes of preventive or occupational medicine, for the assessment of the working capacity of the employee, medical diagnosis, the provision of health or social care or treatment or the management of health or social care systems and services (EU, General Data Protection Regulation (GDPR), Article 9(2)(h)).", "Die Verarbeitung ist für Zwecke der Gesundheitsvorsorge oder der Arbeitsmedizin, für die Beurteilung der Arbeitsfähigkeit des Beschäftigten, für die medizinische Diagnostik, die Versorgung oder Behandlung im Gesundheits- oder Sozialbereich oder für die Verwaltung von Systemen und Diensten im Gesundheits- oder Sozialbereich erforderlich (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(h))."),
    ("public data", "öffentliche Daten"),
    ("public health", "öffentliche Gesundheit"),
    ("public interest", "öffentliches Interesse"),
    ("Reference of contact", "Referenz des Kontakts"),
    ("Reference", "Referenz"),
    ("Referring site (URL) for each access", "Verweisende Webseite (URL) für jeden Zugriff"),
    ("Registration plate number of vehicle", "Kennzeichen des Fahrzeugs"),
    ("Requested page (URL) for each access", "Angeforderte Seite (URL) für jeden Zugriff"),
    ("Required:", "Erforderlich:"),
    ("Resettable identifier of device", "Zurücksetzbare Kennung des Geräts"),
    ("Residential phone number of contact", "Telefonnummer (Festnetz) des Kontakts"),
    ("Residential phone number", "Telefonnummer (Festnetz)"),
    ("Retention and deletion of data", "Aufbewahrung und Löschung von Daten"),
    ("Right of access (EU, General Data Protection Regulation (GDPR), Article 15)", "Auskunftsrecht (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 15)"),
    ("Rights related to automated individual decision-making, including profiling (EU, General Data Protection Regulation (GDPR), Article 22)", "Rechte bezüglich automatisierter Entscheidungen im Einzelfall, einschließlich Profiling (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 22)"),
    ("Right to data portability (EU, General Data Protection Regulation (GDPR), Article 20)", "Recht auf Datenübertragbarkeit (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 20)"),
    ("Right to erasure (EU, General Data Protection Regulation (GDPR), Article 17)", "Recht auf Löschung (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 17)"),
    ("Right to object (EU, General Data Protection Regulation (GDPR), Article 21)", "Widerspruchsrecht (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 21)"),
    ("Right to rectification (EU, General Data Protection Regulation (GDPR), Article 16)", "Recht auf Berichtigung (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 16)"),
    ("Right to restriction of processing (EU, General Data Protection Regulation (GDPR), Article 18)", "Recht auf Einschränkung der Verarbeitung (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 18)"),
    ("Salutation of letter", "Anrede des Briefes"),
    ("Service providers, contractors and agents", "Dienstleister, Auftragnehmer und Vertreter"),
    ("Signature", "Unterschrift"),
    ("Social Security number (SSN) (United States of America)", "Sozialversicherungsnummer (SSN) (Vereinigte Staaten von Amerika)"),
    ("Some contents of our services are provided by third parties that are not directly affiliated with us.", "Manche Inhalte unserer Dienste werden von Drittanbietern bereitgestellt, die nicht direkt mit uns in Verbindung stehen."),
    ("Some parts and sections of our services may contain external links to websites, applications or products owned by and operated by third parties.", "Einige Teile und Bereiche unserer Dienste können externe Links zu Webseiten, Anwendungen oder Produkten enthalten, die im Besitz von Dritten sind und von Dritten betrieben werden."),
    ("Standard Contractual Clauses, as adopted by or approved by the European Commission, are in place.", "Standardvertragsklauseln, eingeführt oder genehmigt durch die Europäische Kommission, sind vorhanden."),
    ("Start of billing", "Beginn der Abrechnung"),
    ("Start of contract", "Vertragsbeginn"),
    ("State of contact", "Bundesland des Kontakts"),
    ("State", "Bundesland"),
    ("Steuerliche Identifikationsnummer (Steuer-IdNr.) (Germany)", "Steuerliche Identifikationsnummer (Steuer-IdNr.) (Deutschland)"),
    ("Steuernummer (St.-Nr) (Germany)", "Steuernummer (St.-Nr) (Deutschland)"),
    ("Street name and house number of contact", "Straße und Hausnummer des Kontakts"),
    ("Street name and house number", "Straße und Hausnummer"),
    ("Subject of email", "Betreff der E-Mail"),
    ("Subject of letter", "Betreff des Briefes"),
    ("substantial public interest", "erhebliches öffentliches Interesse"),
    ("Such third parties help us provide and improve our services.", "Solche Drittunternehmen helfen uns, unsere Dienste bereitzustellen und zu verbessern."),
    ("The country of the recipient has been deemed to provide an adequate level of protection for personal data by the European Commission.", "Das Land des Empfängers bietet nach Einschätzung der Europäischen Kommission ein angemessenes Datenschutzniveau."),
    ("The policy applies to our websites, mobile apps, software applications, products and services, collectively referred to as “services”.", "Die Erklärung gilt für unsere Webseiten, mobilen Apps, Software-Anwendungen, Produkte und Dienste, gemeinsam als „Dienste“ bezeichnet."),
    ("The recipient has Binding Corporate Rules that guarantee the protection of personal data.", "Der Empfänger hat verbindliche interne Datenschutzvorschriften, die den Schutz persönlicher Daten garantieren."),
    ("The recipient is certified as part of the EU-US and Swiss-US Privacy Shield Frameworks.", "Der Empfänger ist im Rahmen des EU-US- und Schweiz-US-Privacy-Shields zertifiziert."),
    ("These cookies do not necessarily contain any personal or identifying information.", "Diese Cookies enthalten nicht zwangsläufig persönliche oder personenbezogene Informationen."),
    ("These external contents, which are displayed, rendered, played back or otherwise conveyed directly within our services, may include advertising, analytics and components from social media.", "Diese externen Inhalte, die direkt innerhalb unserer Dienste angezeigt, übertragen, wiedergegeben oder auf andere Weise überbracht werden, können Werbung, Analysedienste und Komponenten von sozialen Medien umfassen."),
    ("These services include:", "Diese Dienste umfassen:"),
    ("They may even provide methods to disable the use of such technologies completely.", "Es können sogar Methoden bereitstehen, um den Gebrauch dieser Technologien vollständig zu deaktivieren."),
    ("Third-party cookies", "Cookies von Drittanbietern"),
    ("Time for each access", "Uhrzeit für jeden Zugriff"),
    ("Time of cancellation of contract", "Zeitpunkt der Kündigung des Vertrages"),
    ("Time of cancellation", "Zeitpunkt der Kündigung"),
    ("Time of creation of contact", "Zeitpunkt der Erstellung des Kontakts"),
    ("Time of creation of contract", "Zeitpunkt der Erstellung des Vertrages"),
    ("Time of creation of letter", "Zeitpunkt der Erstellung des Briefes"),
    ("Time of creation of logo of company", "Zeitpunkt der Erstellung des Logos des Unternehmens"),
    ("Time of creation of signature", "Zeitpunkt der Erstellung der Unterschrift"),
    ("Time of email", "Uhrzeit der E-Mail"),
    ("Time of first access", "Zeitpunkt des ersten Zugriffs"),
    ("Time of last modification to billing options", "Zeitpunkt der letzten Änderung an den Zahlungsoptionen"),
    ("Time of last modification to contact", "Zeitpunkt der letzten Änderung am Kontakt"),
    ("Time of last modification to contract", "Zeitpunkt der letzten Änderung am Vertrag"),
    ("Time of last modification to letter", "Zeitpunkt der letzten Änderung am Brief"),
    ("Time of last modification to logo of company", "Zeitpunkt der letzten Änderung am Logo des Unternehmens"),
    ("Time of last modification to signature", "Zeitpunkt der letzten Änderung an der Unterschrift"),
    ("Time of letter", "Uhrzeit des Briefes"),
    ("Time of login", "Uhrzeit des Logins"),
    ("Time of next payment", "Zeitpunkt der nächsten Zahlung"),
    ("Time of original message of contact", "Datum der ursprünglichen Nachricht des Kontakts"),
    ("Time of registration", "Uhrzeit der Registrierung"),
    ("Time zone of device", "Zeitzone des Geräts"),
    ("Usage of free trial", "Nutzung eines kostenlosen Probezeitraums"),
    ("User-agent string for each access", "User-Agent-String für jeden Zugriff"),
    ("Valediction of letter", "Grußformel des Briefes"),
    ("VAT ID (European Union) of contact", "USt-IdNr. (Europäische Union) des Kontakts"),
    ("VAT ID (European Union)", "USt-IdNr. (Europäische Union)"),
    ("Verification code (e.g. CVC, CVV, CSC) of credit card", "Sicherheitscode (z.B. CVC, CVV, CSC) der Kreditkarte"),
    ("Verification status of email address", "Bestätigungsstatus der E-Mail-Adresse"),
    ("Version of application used for access", "Version der für den Zugriff genutzten Anwendung"),
    ("Version of operating system on device", "Version des Betriebssystems auf dem Gerät"),
    ("Version of web browser on device", "Version des Webbrowsers auf dem Gerät"),
    ("Version", "Version"),
    ("vital interests", "lebenswichtige Interessen"),
    ("We are responsible for the processing of personal data under this policy.", "Wir sind verantwortlich für die Verarbeitung persönlicher Daten gemäß dieser Erklärung."),
    ("Website", "Webseite"),
    ("Website (URL) of contact", "Webseite (URL) des Kontakts"),
    ("Website (URL)", "Webseite (URL)"),
    ("We follow generally accepted industry standards to protect the data submitted to us, both during transmission and after we have received it, and continue to expand our protections as becomes necessary with changing technology.", "Wir folgen allgemein anerkannten Industriestandards zum Schutz der Daten, die an uns übermittelt werden, sowohl während der Übertragung als auch nach dem Erhalt, und erweitern fortwährend unsere Schutzmaßnahmen, so wie es durch sich ändernde Technologie notwendig wird."),
    ("We have therefore implemented all measures reasonably necessary to protect the personal information of our users from unauthorized access, modification, deletion, disclosure or other misuse.", "Wir haben deshalb alle Maßnahmen umgesetzt, die vernünftigerweise notwendig sind, um die persönlichen Informationen unserer Nutzer vor unberechtigtem Zugriff, Veränderung, Löschung, Offenlegung oder sonstigem Missbrauch zu schützen."),
    ("We may be compelled to such disclosure in response to a court order, a warrant or a similar request by a judicial body or a government agency, or when we believe in good faith that the disclosure is reasonably necessary to protect our rights or property, that of any third party, or the safety of the general public.", "Wir können zu solch einer Offenlegung durch eine gerichtliche Anordnung, einen Haftbefehl, einen Durchsuchungsbeschluss oder eine ähnliche Aufforderung einer Justizbehörde oder einer Regierungsstelle gezwungen sein, oder wenn wir in gutem Glauben davon ausgehen, dass diese Offenlegung erforderlich ist, um Rechte oder Eigentum von uns oder Dritten oder die Sicherheit der Allgemeinheit zu schützen."),
    ("We may change this privacy policy from time to time.", "Gelegentlich können wir diese Datenschutzerklärung anpassen."),
    ("We may use cookies and similar technologies, such as “Web Storage” (specifically “localStorage”) and “Internal Storage”, to make interactions with our services more convenient, efficient and secure.", "Wir können Cookies und ähnliche Technologien, wie beispielsweise „Web Storage“ (insbesondere „localStorage“) und „Interner Speicher“, einsetzen, um die Interaktionen mit unseren Diensten bequemer, effizienter und sicherer zu machen."),
    ("We never knowingly collect any information from children under %d.", "Niemals erheben wir wissentlich Informationen von Kindern unter %d."),
    ("We never sell, rent out or trade any of our user’s personal information with third parties for commercial purposes.", "Niemals verkaufen, verleihen oder handeln wir persönliche Informationen unserer Nutzer mit Dritten für wirtschaftliche Zwecke."),
    ("We use this information for marketing and promotional purposes.", "Wir nutzen diese Informationen für Marketing- und Werbezwecke."),
    ("We use this information for the provision, maintenance and administration of our services and to monitor and protect the security of our services.", "Wir nutzen diese Informationen für die Bereitstellung, Wartung und Verwaltung unserer Dienste und zum Überwachen und Schützen der Sicherheit unserer Dienste."),
    ("We use this information to improve our services through research and analysis and to better understand how our services are used.", "Wir nutzen diese Informationen, um unsere Dienste durch Forschung und Analysen zu verbessern und um besser zu verstehen, wie unsere Dienste genutzt werden."),
    ("We verify that at least one of the following safeguards is implemented:", "Wir stellen sicher, dass mindestens eine der folgenden Schutzmaßnahmen umgesetzt ist:"),
    ("Without these technologies, use of our services would not be reasonably possible.", "Ohne diese Technologien wäre die Nutzung unserer Dienste nicht in vernünftiger Weise möglich."),
    ("Year and month of birth of contact", "Jahr und Monat der Geburt des Kontakts"),
    ("Year and month of birth", "Jahr und Monat der Geburt"),
    ("Year of birth of contact", "Geburtsjahr des Kontakts"),
    ("Year of birth", "Geburtsjahr"),
    ("Year of construction of vehicle", "Baujahr des Fahrzeugs"),
    ("yes", "ja"),
];

const FORMAL_ROWS: &[(&str, &str)] = &[
    ("Access your personal data", "Auf Ihre persönlichen Daten zugreifen"),
    ("Apart from that, please recognize that protecting your personal information is, in other parts, also your own responsibility.", "Bitte denken Sie im Übrigen daran, dass der Schutz Ihrer persönlichen Informationen in anderen Teilen ebenso Ihrer eigenen Verantwortung unterliegt."),
    ("As a condition for your use of our services as a customer, user or visitor (collectively referred to as a “user” or as your “use”), you consent to the terms of this policy and you agree that your personal information will be handled as outlined below.", "Als Bedingung für Ihre Nutzung unserer Dienste als Kunde, Nutzer oder Besucher (zusammen als „Nutzer“ oder als Ihre „Nutzung“ bezeichnet) stimmen Sie den Bedingungen dieser Erklärung zu und Sie erklären sich damit einverstanden, dass Ihre persönlichen Informationen wie im Folgenden beschrieben verarbeitet werden."),
    ("Erase your personal data", "Ihre persönlichen Daten löschen"),
    ("Especially, you are responsible for safeguarding any passwords and other authentication information that you use to access our services, as well as limiting physical access to the devices used.", "Insbesondere sind Sie dafür verantwortlich, jegliche Passwörter und andere Informationen zur Authentifizierung zu schützen, die Sie nutzen, um auf unsere Dienste zuzugreifen, sowie dafür, den Zugang zu den genutzten Geräten einzuschränken."),
    ("Except as limited under applicable law, you have the following rights with regard to your personal data:", "Soweit nicht durch anwendbares Recht eingeschränkt, haben Sie im Hinblick auf Ihre persönlichen Daten die folgenden Rechte:"),
    ("Export your personal data", "Ihre persönlichen Daten exportieren"),
    ("For any less significant changes to this privacy policy that do not affect your rights or choices in a material way, we encourage all users to check this policy for updated versions periodically.", "Für jegliche Änderungen an dieser Datenschutzerklärung, die von geringerer Bedeutung sind und Ihre Rechte oder Wahlmöglichkeiten nicht in wichtiger Weise betreffen, empfehlen wir allen Nutzern, diese Erklärung regelmäßig hinsichtlich aktualisierter Versionen zu überprüfen."),
    ("For example, we may use these technologies to keep you signed in and to remember your preferences with regard to our services.", "Wir können diese Technologien zum Beispiel verwenden, um Sie eingeloggt bleiben zu lassen und um Ihre Einstellungen im Hinblick auf unsere Dienste beizubehalten."),
    ("For more information on how to delete such data currently stored on your device, please refer to the manual or help section of your web browser or operating system.", "Weitere Informationen darüber, wie Sie solche Daten, die zurzeit auf Ihrem Gerät gespeichert sind, löschen können, finden Sie im Handbuch oder Hilfebereich Ihres Webbrowsers oder Betriebssystems."),
    ("For our contact information, please see further below.", "Unsere Kontaktdaten finden Sie weiter unten."),
    ("From time to time, we may share some information we have collected from you, including personal information, with a limited number of third-party vendors, service providers, contractors, resellers, agents or business partners, solely for the purpose of performing certain functions on our behalf.", "Gelegentlich geben wir möglicherweise einen Teil der Informationen, die wir über Sie erfasst haben, einschließlich persönlicher Informationen, an eine begrenzte Zahl von Drittunternehmen weiter, darunter Lieferanten, Dienstleister, Auftragnehmer, Vertriebspartner und Vertreter. Dies geschieht ausschließlich zur Ausführung bestimmter Funktionen für uns und in unserem Auftrag."),
    ("How we secure your information", "Wie wir Ihre Informationen sichern"),
    ("However, please be aware that, despite our best efforts, no method of electronic transmission or storage is perfectly secure and no measures can guarantee absolute security.", "Beachten Sie jedoch bitte, dass trotz unserer größten Bemühungen keine Methode der elektronischen Datenübertragung oder Datenspeicherung vollkommen sicher ist und keine Maßnahmen eine absolute Sicherheit garantieren können."),
    ("If any such change of ownership happens, the organization receiving your personal information will have to respect the promises that we have made in any pre-existing privacy policy such as this one.", "Falls ein solcher Wechsel des Eigentümers stattfinden sollte, wird die Gesellschaft, die Ihre persönlichen Informationen erhält, die Zusagen, die wir in einer zuvor existierenden Datenschutzerklärung wie dieser gemacht haben, anerkennen und achten müssen."),
    ("If in doubt, rather do not share sensitive information.", "Geben Sie sensible Informationen im Zweifelsfall eher nicht preis."),
    ("If we are involved in a merger, an acquisition by another company, or a sale of all or a portion of our business or assets, your information will likely be among the assets transferred.", "Wenn wir in eine Fusion, eine Übernahme durch ein anderes Unternehmen oder einen Verkauf unseres gesamten Unternehmens, unserer gesamten Vermögenswerte oder Teilen davon involviert sind, werden Ihre Informationen wahrscheinlich Bestandteil der zu übertragenden Vermögensgüter sein."),
    ("If we have any plausible reason to believe that you are a user who is under the age of %d, we will have to prohibit you from continuing your use of our services.", "Wenn wir einen glaubwürdigen Grund haben, anzunehmen, dass Sie ein Nutzer im Alter unter %d sind, müssen wir Ihnen die weitere Nutzung unserer Dienste untersagen."),
    ("If you are a child below that age, you may not use any of our services.", "Wenn Sie ein Kind unterhalb dieses Alters sind, dürfen Sie keinen unserer Dienste nutzen."),
    ("If you are unsatisfied with our response or with the way we are processing your personal data, you may contact your local data protection authority.", "Falls Sie mit unserer Antwort oder mit der Art und Weise, wie wir Ihre persönlichen Daten verarbeiten, unzufrieden sind, können Sie Ihre örtliche Datenschutzbehörde kontaktieren."),
    ("If you have any questions or concerns regarding this policy, our privacy practices or certain aspects of our services, please contact us at any time.", "Sollten Sie irgendwelche Fragen oder Bedenken bezüglich dieser Erklärung, unserer Datenschutzpraktiken oder bestimmter Aspekte unserer Dienste haben, nehmen Sie bitte jederzeit Kontakt mit uns auf."),
    ("If you have any questions regarding the protection of your data, your rights, or how to exercise them, please contact us.", "Wenn Sie irgendwelche Fragen im Hinblick auf den Schutz Ihrer Daten, Ihre Rechte oder deren Ausübung haben, kontaktieren Sie uns bitte."),
    ("If you need help, please contact us.", "Wenn Sie Hilfe benötigen, kontaktieren Sie uns bitte."),
    ("If you would like to cancel your use of our services, delete your account, or delete your personal information, you may do so in the respective sections of our services.", "Wenn Sie Ihre Nutzung unserer Dienste beenden möchten, Ihr Benutzerkonto löschen möchten oder Ihre persönlichen Informationen entfernen möchten, können Sie dies in den jeweiligen Bereichen unserer Dienste tun."),
    ("In general, the applicable version of this policy is the one that is current at the time of your access of our services.", "Im Allgemeinen ist die gültige Version dieser Erklärung diejenige, die zum Zeitpunkt Ihres Zugriffs auf unsere Dienste aktuell ist."),
    ("In order to prevent loss of data due to human errors or system failures, we keep additional backup copies of data, as most companies and service providers do, which may include some of your personal information.", "Um Datenverlust durch menschliche Fehler oder durch Systemfehler zu verhindern, bewahren wir, wie es die meisten Unternehmen und Dienstleister tun, zusätzliche Sicherheitskopien auf, die Teile Ihrer persönlichen Informationen enthalten können."),
    ("Most changes will presumably be minor only and will therefore not affect your rights.", "Die meisten Änderungen werden in Umfang und Bedeutung wahrscheinlich nur gering sein und deshalb Ihre Rechte nicht betreffen."),
    ("Object to automated decision-making", "Automatisierten Entscheidungen widersprechen"),
    ("Object to direct marketing", "Der Direktwerbung widersprechen"),
    ("Object to the use of your personal data", "Der Nutzung Ihrer persönlichen Daten widersprechen"),
    ("Please contact us if you want further information on the specific mechanisms used by us when transferring your personal data internationally.", "Bitte kontaktieren Sie uns, wenn Sie weitere Informationen zu den konkreten Mechanismen wünschen, die wir bei der internationalen Übermittlung Ihrer persönlichen Daten einsetzen."),
    ("Processing is necessary for the performance of a contract to which you are party or in order to take steps at your request prior to entering into a contract (EU, General Data Protection Regulation (GDPR), Article 6(1)(b)).", "Die Verarbeitung ist für die Erfüllung eines Vertrages, dessen Vertragspartei Sie sind, oder zur Durchführung vorvertraglicher Maßnahmen erforderlich, die auf Ihre Anfrage erfolgen (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 6(1)(b))."),
    ("Processing is necessary in order to protect your vital interests or those of another natural person (EU, General Data Protection Regulation (GDPR), Article 6(1)(d)).", "Die Verarbeitung ist erforderlich, um Ihre lebenswichtigen Interessen oder die einer anderen natürlichen Person zu schützen (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 6(1)(d))."),
    ("Processing is necessary to protect your vital interests or those of another natural person where you are physically or legally incapable of giving consent (EU, General Data Protection Regulation (GDPR), Article 9(2)(c)).", "Die Verarbeitung ist zum Schutz Ihrer lebenswichtigen Interessen oder derer einer anderen natürlichen Person erforderlich, sofern Sie aus körperlichen oder rechtlichen Gründen außerstande sind, Ihre Einwilligung zu geben (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(c))."),
    ("Processing relates to personal data that you manifestly make public (EU, General Data Protection Regulation (GDPR), Article 9(2)(e)).", "Die Verarbeitung bezieht sich auf personenbezogene Daten, die Sie offensichtlich öffentlich gemacht haben (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(e))."),
    ("Protecting your privacy and keeping your personal information safe is our highest priority.", "Die Sicherung Ihrer Privatsphäre und der Schutz Ihrer persönlichen Informationen haben für uns höchste Priorität."),
    ("Restrict the use of your personal data", "Die Nutzung Ihrer persönlichen Daten einschränken"),
    ("See further below for our contact information.", "Unsere Kontaktdaten finden Sie weiter unten."),
    ("Should there be any substantial changes to this policy with material effects on any of your rights or choices, you will be notified via a prominent notice within our services or by email to the primary email address specified in your account at least %d days prior to such changes taking effect.", "Sollte es wesentliche Änderungen an dieser Erklärung mit wichtigen Auswirkungen auf Ihre Rechte oder Wahlmöglichkeiten geben, werden Sie durch eine auffällige Ankündigung innerhalb unserer Dienste oder per E-Mail an die primäre E-Mail-Adresse, die in Ihrem Benutzerkonto hinterlegt ist, mindestens %d Tage vor dem Inkrafttreten solcher Änderungen benachrichtigt."),
    ("Should you believe that we might have any personal information of a child under the age of %d, in particular a child of your own, please contact us so that the data in question can be deleted, if appropriate.", "Sollten Sie glauben, dass wir persönliche Informationen von einem Kind unter %d gespeichert haben könnten, insbesondere von einem Ihrer Kinder, kontaktieren Sie uns bitte umgehend, sodass die betroffenen Daten, falls zutreffend, gelöscht werden können."),
    ("Some of our external service providers and recipients of personal data are based outside your country and outside our country.", "Einige unserer externen Dienstleister und Empfänger persönlicher Daten haben ihren Sitz außerhalb Ihres Landes und außerhalb unseres Landes."),
    ("Such third countries may have data protection rules that are different from those in your or our country.", "Solche Drittländer haben möglicherweise Datenschutzvorschriften, die sich von denen in Ihrem oder unserem Land unterscheiden."),
    ("The settings and features of your web browser or operating system may allow you to control how third parties can store cookies on your device.", "Die Einstellungen und Funktionen Ihres Webbrowsers oder Betriebssystems können Ihnen erlauben, zu kontrollieren, wie Drittanbieter Cookies auf Ihrem Gerät speichern können."),
    ("The third parties that provide these contents may store cookies on your device for their own purposes and interests, which we cannot control.", "Die Drittanbieter, die diese Inhalte bereitstellen, können Cookies für ihre eigenen Zwecke und Interessen auf Ihrem Gerät speichern, was wir nicht kontrollieren können."),
    ("These third parties do not have any right to use the information that we share about you beyond what is necessary to assist us with the specific task at hand.", "Diese Drittunternehmen sind nicht berechtigt, die Informationen, die wir über Sie weitergeben, über das Maß hinaus zu nutzen, das notwendig ist, um uns bei der konkreten Aufgabenstellung zu unterstützen."),
    ("They are transferred from our servers to your device through your web browser or app.", "Sie werden von unseren Servern über Ihren Webbrowser oder Ihre App auf Ihr Gerät übertragen."),
    ("They are, however, commonly used to store a unique identifier for every individual user, so that our servers do not lose information on who you are while you are moving through the individual parts of our services.", "Sie werden jedoch häufig dazu verwendet, eine eindeutige Kennung für jeden einzelnen Nutzer zu speichern, damit unsere Server nicht die Information darüber verlieren, wer Sie sind, während Sie sich durch die einzelnen Bereiche unserer Dienste bewegen."),
    ("This information is not required and you can use parts of our services without this information. You have to give your consent before we collect this data, but some features may not be available without.", "Diese Information wird nicht zwingend benötigt und Sie können Teile unserer Dienste ohne diese Angabe nutzen. Sie müssen Ihre Genehmigung erteilen, bevor wir diese Daten erfassen, aber manche Funktionen sind ohne diese Daten möglicherweise nicht verfügbar."),
    ("This information is not required and you can use parts of our services without this information. You may withdraw your consent for our collection of this data, but some features may not be available without.", "Diese Information wird nicht zwingend benötigt und Sie können Teile unserer Dienste ohne diese Angabe nutzen. Sie können Ihre Einwilligung zu unserer Erfassung dieser Daten widerrufen, aber manche Funktionen sind ohne diese Daten möglicherweise nicht verfügbar."),
    ("This information is required for the operation of our services and its collection is therefore a condition for your use of our services.", "Diese Information wird für den Betrieb unserer Dienste benötigt und ihre Erhebung ist deshalb eine Bedingung für Ihre Nutzung unserer Dienste."),
    ("This is possible either by using the “Unsubscribe” feature at the bottom of such emails that we may send, or by adjusting the settings in your account within our services, where applicable.", "Dies ist möglich, indem Sie entweder die „Abmelden“-Funktion am unteren Ende von solchen E-Mails benutzen, die wir senden könnten, oder durch das Ändern der Einstellungen in Ihrem Benutzerkonto innerhalb unserer Dienste, wo zutreffend."),
    ("This means that parts of your personal information may temporarily remain on our servers even after deletion or termination of your use of our services.", "Dies bedeutet, dass Teile Ihrer persönlichen Informationen selbst nach Löschung oder nach Beendigung Ihrer Nutzung unserer Dienste vorübergehend auf unseren Servern bestehen bleiben können."),
    ("This means that the processing of your personal data by those third parties involves an international transfer of your data to a third country.", "Das bedeutet, dass die Verarbeitung Ihrer persönlichen Daten durch diese Dritten eine internationale Übermittlung Ihrer Daten in ein Drittland beinhaltet."),
    ("This notification will include help on choices you may have regarding the transfer and treatment of your personal information.", "Diese Benachrichtigung wird Hilfe zu den Wahlmöglichkeiten beinhalten, die Sie möglicherweise im Hinblick auf die Übertragung und Behandlung Ihrer persönlichen Informationen haben."),
    ("This notification will include help on choices you may have regarding the treatment of your personal information.", "Diese Benachrichtigung wird Hilfe zu den Wahlmöglichkeiten beinhalten, die Sie möglicherweise im Hinblick auf die Behandlung Ihrer persönlichen Informationen haben."),
    ("This privacy policy governs your use of our services regardless of the domain names, operating systems, platforms or devices that are used to access the services, and regardless of whether such access is in connection with an account or not.", "Diese Datenschutzerklärung regelt Ihre Nutzung unserer Dienste, unabhängig von den Domain-Namen, Betriebssystemen, Plattformen oder Geräten, die für den Zugriff auf die Dienste genutzt werden, und unabhängig davon, ob solcher Zugriff in Verbindung mit einem Benutzerkonto geschieht oder nicht."),
    ("This privacy statement (“privacy policy” or “policy”) is designed to help you better understand how and to what extent we collect, use, disclose, transfer and store your information.", "Diese Datenschutzrichtlinie („Datenschutzerklärung“ oder „Erklärung“) soll Ihnen helfen, besser zu verstehen, wie und in welchem Umfang wir Ihre Informationen erfassen, verwenden, offenlegen, übertragen und speichern."),
    ("Thus, for any international transfer of data, we ensure that appropriate technical, organizational and contractual measures are in place to guarantee that a similar degree of protection is afforded to your data internationally and that your personal data remains protected to the standards described in this policy.", "Daher stellen wir bei jeder internationalen Übermittlung von Daten sicher, dass angemessene technische, organisatorische und vertragliche Maßnahmen getroffen werden, um zu gewährleisten, dass Ihre Daten auch international ein vergleichbares Schutzniveau genießen und dass Ihre persönlichen Daten gemäß den in dieser Erklärung beschriebenen Standards geschützt bleiben."),
    ("Update your personal data", "Ihre persönlichen Daten aktualisieren"),
    ("Upon verification of your identity, we will respond to your request within a reasonable period of time.", "Nach Überprüfung Ihrer Identität werden wir innerhalb eines angemessenen Zeitraumes auf Ihre Anfrage antworten."),
    ("We advise you to verify the privacy practices of those third parties individually.", "Wir raten Ihnen, die Datenschutzpraktiken dieser Drittunternehmen individuell zu überprüfen."),
    ("We always collect only the minimum amount of personal information necessary to provide our services to you, unless you choose to provide more such information voluntarily.", "Wir erheben immer nur die kleinstmögliche Menge an persönliche Informationen, die nötig ist, um unsere Dienste für Sie bereitstellen zu können, es sei denn, Sie entschließen sich freiwillig dazu, mehr solcher Informationen zu übertragen."),
    ("We encourage you not to provide any personal information to those third parties before assuring yourself of proper privacy practices on their part.", "Wir empfehlen Ihnen, diesen Drittunternehmen keine persönlichen Informationen bereitzustellen, bevor Sie sich von angemessenen Datenschutzpraktiken seitens dieser Unternehmen überzeugt haben."),
    ("We encourage you to give us, and, more generally, any provider of digital services, only the amount of data you are comfortable sharing.", "Wir ermutigen Sie dazu, uns, und allgemeiner jedem Anbieter von digitalen Dienstleistungen, nur die Menge an Daten bereitzustellen, mit der Sie sich wohlfühlen."),
    ("We have no knowledge about and are not responsible for the way that those third parties handle any personal information which you provide to them yourself.", "Wir haben keine Kenntnis von und sind nicht verantwortlich für die Art und Weise, wie diese Drittunternehmen persönliche Informationen behandeln, die Sie ihnen selbst bereitstellen."),
    ("We may retain and use your personal information and data as necessary to comply with our legal obligations, to resolve disputes, and to enforce our rights and agreements.", "Wir bewahren Ihre persönlichen Informationen und Daten möglicherweise so lange auf und nutzen diese, wie es erforderlich ist, um unsere gesetzlichen Verpflichtungen einzuhalten, Streitfälle beizulegen und unsere Rechte und Vereinbarungen durchzusetzen."),
    ("We offer you simple ways to view, update or delete the data we have collected about you.", "Wir bieten Ihnen einfache Möglichkeiten, die Informationen, die wir über Sie erfasst haben, anzusehen, zu aktualisieren und zu löschen."),
    ("We take the trust that you place in us very seriously.", "Wir nehmen das Vertrauen, das Sie uns entgegenbringen, sehr ernst."),
    ("We use this information to personalize our services for you and to adjust them to your preferences.", "Wir nutzen diese Informationen, um unsere Dienste für Sie zu personalisieren und sie an Ihre Präferenzen anzupassen."),
    ("We use this information to provide and fulfill the specific services that you explicitly request.", "Wir nutzen diese Informationen, um die konkreten Dienstleistungen, die Sie ausdrücklich anfordern, bereitstellen und erfüllen zu können."),
    ("We use this information to provide customer service to you, to answer your questions and to communicate with you about your use of our services.", "Wir nutzen diese Informationen, um Ihnen Kundendienst anzubieten, Ihre Fragen zu beantworten und mit Ihnen über Ihre Nutzung unserer Dienste zu kommunizieren."),
    ("We use this information to provide meaningful and unobtrusive advertising to you.", "Wir nutzen diese Informationen, um Ihnen aussagekräftige und unaufdringliche Werbung zeigen zu können."),
    ("We want to help and will be happy to address your concerns.", "Wir möchten helfen und kümmern uns gerne um Ihr Anliegen."),
    ("We will retain certain pieces of personal information for as long as you use our services, as long as your account exists, or as long as needed for us to be able to provide our services to you.", "Wir werden gewisse persönliche Informationen so lange aufbewahren, wie Sie unsere Dienste nutzen, wie Ihr Benutzerkonto besteht oder wie es nötig ist, um unsere Dienste für Sie bereitstellen zu können."),
    ("You are free to file a complaint with the data protection authority.", "Es steht Ihnen frei, bei der Datenschutzbehörde eine Beschwerde einzulegen."),
    ("You are welcome to make use of these settings and features of your web browser or operating system, but that may prevent our services from working correctly for you.", "Sie können gerne von diesen Einstellungen und Funktionen in Ihrem Webbrowser oder Betriebssystem Gebrauch machen, aber dies kann unsere Dienste daran hindern, korrekt für Sie zu funktionieren."),
    ("You can reach us via email at:", "Sie erreichen uns per E-Mail unter:"),
    ("You have given consent to the processing of your personal data for one or more specific purposes (EU, General Data Protection Regulation (GDPR), Article 6(1)(a)).", "Sie haben Ihre Einwilligung zu der Verarbeitung Ihrer persönlichen Daten für einen oder mehrere bestimmte Zwecke gegeben (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 6(1)(a))."),
    ("You have given explicit consent to the processing of your personal data for one or more specified purposes (EU, General Data Protection Regulation (GDPR), Article 9(2)(a)).", "Sie haben Ihre ausdrückliche Einwilligung zu der Verarbeitung Ihrer persönlichen Daten für einen oder mehrere festgelegte Zwecke gegeben (EU, Datenschutz-Grundverordnung (DSGVO), Artikel 9(2)(a))."),
    ("You have the right not to be subject to a decision based solely on automated decision-making, including profiling, where the decision would have a legal effect on you or produce a similarly significant effect.", "Sie haben das Recht, nicht einer ausschließlich auf einer automatisierten Verarbeitung, einschließlich Profiling, beruhenden Entscheidung unterworfen zu werden, die Ihnen gegenüber rechtliche Wirkung entfaltet oder Sie in ähnlicher Weise erheblich beeinträchtigt."),
    ("You have the right to be informed of and request access to the personal data we process about you.", "Sie haben das Recht, darüber informiert zu werden, welche persönlichen Daten wir über Sie verarbeiten, und Zugang zu diesen Daten zu verlangen."),
    ("You have the right to object to us processing your personal data on grounds relating to your particular situation where we no longer have a legitimate reason or legal need to process it.", "Sie haben das Recht, aus Gründen, die sich aus Ihrer besonderen Situation ergeben, der Verarbeitung Ihrer persönlichen Daten durch uns zu widersprechen, wenn wir keinen berechtigten Grund und keine rechtliche Notwendigkeit mehr für die Verarbeitung haben."),
    ("You have the right to object to your personal data being processed for direct marketing purposes.", "Sie haben das Recht, der Verarbeitung Ihrer persönlichen Daten zum Zwecke der Direktwerbung zu widersprechen."),
    ("You have the right to request a copy of your personal data in electronic and machine-readable form, and the right to transmit that personal data to another service provider.", "Sie haben das Recht, eine Kopie Ihrer persönlichen Daten in einem elektronischen und maschinenlesbaren Format zu verlangen, sowie das Recht, diese persönlichen Daten an einen anderen Dienstanbieter zu übermitteln."),
    ("You have the right to request that we amend or update your personal data where it is inaccurate or incomplete.", "Sie haben das Recht zu verlangen, dass wir Ihre persönlichen Daten berichtigen oder aktualisieren, wenn diese unrichtig oder unvollständig sind."),
    ("You have the right to request that we delete your personal data.", "Sie haben das Recht zu verlangen, dass wir Ihre persönlichen Daten löschen."),
    ("You have the right to request that we temporarily or permanently stop processing your personal data.", "Sie haben das Recht zu verlangen, dass wir die Verarbeitung Ihrer persönlichen Daten vorübergehend oder dauerhaft einstellen."),
    ("You may also contact the data protection authority that is responsible for us:", "Sie können auch die Datenschutzbehörde kontaktieren, die für uns zuständig ist:"),
    ("You may opt out of receiving any newsletters or promotional messages from us at any time.", "Sie können dem Empfang jeglicher Newsletter oder Werbenachrichten von uns jederzeit widersprechen."),
    ("You should never disclose your authentication information to any third party and you should notify us immediately of any unauthorized use of your account.", "Sie sollten Ihre Informationen zur Authentifizierung niemals Dritten preisgeben und Sie sollten uns unverzüglich über jegliche unberechtigte Nutzung Ihres Benutzerkontos benachrichtigen."),
    ("You therefore consent to our use of cookies and related technologies when using our services.", "Sie erklären sich deshalb mit unserer Nutzung von Cookies und ähnlichen Technologien einverstanden, wenn Sie unsere Dienste nutzen."),
    ("You will be notified via a prominent notice within our services or by email to the primary email address specified in your account at least %d days before any such transfer of your personal information.", "Sie werden durch eine auffällige Ankündigung innerhalb unserer Dienste oder per E-Mail an die primäre E-Mail-Adresse, die in Ihrem Benutzerkonto hinterlegt ist, mindestens %d Tage vor einer solchen Übertragung Ihrer persönlichen Informationen benachrichtigt."),
    ("You will continue to receive essential, non-promotional messages regarding your account, such as technical notices, order confirmations, or other service-related messages, which are required for us to be able to provide our services to you.", "Sie werden weiterhin grundlegende Nachrichten bezüglich Ihres Benutzerkontos erhalten, die nicht der Werbung dienen, wie etwa technische Mitteilungen, Auftragsbestätigungen oder andere dienstbezogene Nachrichten, die nötig sind, damit wir Ihnen unsere Dienste bereitstellen können."),
    ("Your rights", "Ihre Rechte"),
    ("Your web browser or app then sends these small text files back to us whenever you access our services.", "Ihr Webbrowser oder Ihre App sendet diese kleinen Textdateien dann jedes Mal an uns zurück, wenn Sie auf unsere Dienste zugreifen."),
    ("Your web browser or operating system usually provides means to delete such data currently stored on your device.", "Ihr Webbrowser oder Betriebssystem bietet üblicherweise Möglichkeiten an, solche Daten, die zurzeit auf Ihrem Gerät gespeichert sind, zu löschen."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_lookup() {
        assert_eq!(lookup("Cookies"), Some("Cookies"));
        assert_eq!(lookup("Version"), Some("Version"));
        assert_eq!(lookup("Address"), Some("Adresse"));
    }

    #[test]
    fn test_formal_table_wins() {
        assert!(lookup("You are free to file a complaint with the data protection authority.")
            .unwrap()
            .contains("Ihnen"));
    }

    #[test]
    fn test_missing_lookup() {
        assert_eq!(lookup("Definitely not in any table"), None);
    }

    #[test]
    fn test_templates_keep_their_directives() {
        for (source, translation) in BASE_ROWS.iter().chain(FORMAL_ROWS.iter()) {
            assert_eq!(
                source.matches("%d").count(),
                translation.matches("%d").count(),
                "{}",
                source
            );
            assert_eq!(
                source.matches("%s").count(),
                translation.matches("%s").count(),
                "{}",
                source
            );
        }
    }
}
