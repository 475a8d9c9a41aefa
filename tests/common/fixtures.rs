/// The header block of an OFX 1.02 file, blank separator line included.
/// The body that follows starts on line 11.
pub const TAG_SOUP_HEADER: &str = "OFXHEADER:100\r\n\
DATA:OFXSGML\r\n\
VERSION:102\r\n\
SECURITY:NONE\r\n\
ENCODING:USASCII\r\n\
CHARSET:1252\r\n\
COMPRESSION:NONE\r\n\
OLDFILEUID:NONE\r\n\
NEWFILEUID:NONE\r\n\
\r\n";

/// Prefixes `body` with [`TAG_SOUP_HEADER`].
pub fn tag_soup(body: &str) -> Vec<u8> {
    format!("{}{}", TAG_SOUP_HEADER, body).into_bytes()
}

/// A checking account statement in the 1.x dialect. Value closers are
/// mostly omitted, with a few present the way some banks emit them.
pub fn tag_soup_statement() -> Vec<u8> {
    tag_soup(
        "<OFX>\r\n\
<SIGNONMSGSRSV1>\r\n\
<SONRS>\r\n\
<STATUS>\r\n\
<CODE>0\r\n\
<SEVERITY>INFO\r\n\
</STATUS>\r\n\
<DTSERVER>20231015120000[-5:EST]\r\n\
<LANGUAGE>ENG\r\n\
</SONRS>\r\n\
</SIGNONMSGSRSV1>\r\n\
<BANKMSGSRSV1>\r\n\
<STMTTRNRS>\r\n\
<TRNUID>1001\r\n\
<STATUS>\r\n\
<CODE>0\r\n\
<SEVERITY>INFO\r\n\
</STATUS>\r\n\
<STMTRS>\r\n\
<CURDEF>USD\r\n\
<BANKACCTFROM>\r\n\
<BANKID>121000248\r\n\
<ACCTID>123456789\r\n\
<ACCTTYPE>CHECKING\r\n\
</BANKACCTFROM>\r\n\
<BANKTRANLIST>\r\n\
<DTSTART>20231001\r\n\
<DTEND>20231015\r\n\
<STMTTRN>\r\n\
<TRNTYPE>DEBIT\r\n\
<DTPOSTED>19961005132200.124[-5:EST]\r\n\
<TRNAMT>-42.50\r\n\
<FITID>2023100301</FITID>\r\n\
<NAME>Coffee &amp; Co\r\n\
<MEMO>Card purchase\r\n\
</STMTTRN>\r\n\
<STMTTRN>\r\n\
<TRNTYPE>CREDIT\r\n\
<DTPOSTED>20231010\r\n\
<TRNAMT>1500.00\r\n\
<FITID>2023101001\r\n\
<PAYEE>\r\n\
<NAME>Acme Payroll\r\n\
<CITY>Springfield\r\n\
</PAYEE>\r\n\
</STMTTRN>\r\n\
</BANKTRANLIST>\r\n\
<LEDGERBAL>\r\n\
<BALAMT>1457.50\r\n\
<DTASOF>20231015120000\r\n\
</LEDGERBAL>\r\n\
</STMTRS>\r\n\
</STMTTRNRS>\r\n\
</BANKMSGSRSV1>\r\n\
</OFX>\r\n",
    )
}

/// The same statement as [`tag_soup_statement`] in the 2.x XML dialect.
pub const XML_STATEMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<?OFX OFXHEADER="200" VERSION="211" SECURITY="NONE" OLDFILEUID="NONE" NEWFILEUID="NONE"?>
<OFX>
  <SIGNONMSGSRSV1>
    <SONRS>
      <STATUS>
        <CODE>0</CODE>
        <SEVERITY>INFO</SEVERITY>
      </STATUS>
      <DTSERVER>20231015120000[-5:EST]</DTSERVER>
      <LANGUAGE>ENG</LANGUAGE>
    </SONRS>
  </SIGNONMSGSRSV1>
  <BANKMSGSRSV1>
    <STMTTRNRS>
      <TRNUID>1001</TRNUID>
      <STATUS>
        <CODE>0</CODE>
        <SEVERITY>INFO</SEVERITY>
      </STATUS>
      <STMTRS>
        <CURDEF>USD</CURDEF>
        <BANKACCTFROM>
          <BANKID>121000248</BANKID>
          <ACCTID>123456789</ACCTID>
          <ACCTTYPE>CHECKING</ACCTTYPE>
        </BANKACCTFROM>
        <BANKTRANLIST>
          <DTSTART>20231001</DTSTART>
          <DTEND>20231015</DTEND>
          <STMTTRN>
            <TRNTYPE>DEBIT</TRNTYPE>
            <DTPOSTED>19961005132200.124[-5:EST]</DTPOSTED>
            <TRNAMT>-42.50</TRNAMT>
            <FITID>2023100301</FITID>
            <NAME>Coffee &amp; Co</NAME>
            <MEMO>Card purchase</MEMO>
          </STMTTRN>
          <STMTTRN>
            <TRNTYPE>CREDIT</TRNTYPE>
            <DTPOSTED>20231010</DTPOSTED>
            <TRNAMT>1500.00</TRNAMT>
            <FITID>2023101001</FITID>
            <PAYEE>
              <NAME>Acme Payroll</NAME>
              <CITY>Springfield</CITY>
            </PAYEE>
          </STMTTRN>
        </BANKTRANLIST>
        <LEDGERBAL>
          <BALAMT>1457.50</BALAMT>
          <DTASOF>20231015120000</DTASOF>
        </LEDGERBAL>
      </STMTRS>
    </STMTTRNRS>
  </BANKMSGSRSV1>
</OFX>
"#;
